// 🌱 Seed Loading - element records from JSON or CSV files
//
// JSON: array of {"code", "name", "rank"} objects
// CSV:  header row `code,name,rank`

use crate::entities::Element;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load elements from a JSON array
pub fn load_elements_json<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read elements file: {:?}", path.as_ref()))?;

    let elements: Vec<Element> =
        serde_json::from_str(&content).context("Failed to parse elements JSON")?;

    debug!(count = elements.len(), path = ?path.as_ref(), "loaded elements from JSON");
    Ok(elements)
}

/// Load elements from a CSV file with a `code,name,rank` header
pub fn load_elements_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut elements = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let element: Element =
            result.with_context(|| format!("Failed to deserialize element on row {}", line + 1))?;
        elements.push(element);
    }

    debug!(count = elements.len(), path = ?path.as_ref(), "loaded elements from CSV");
    Ok(elements)
}

/// Pick the loader from the file extension (`.json` or `.csv`)
pub fn load_elements<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("json") => load_elements_json(path),
        Some("csv") => load_elements_csv(path),
        _ => bail!("Unsupported elements file (expected .json or .csv): {:?}", path),
    }
}

// ============================================================================
// TESTS
// ============================================================================
