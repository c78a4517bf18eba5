// ⚙️ Demo Configuration
//
// Resolution order: `--config <path>` argument, then the
// COLLECTION_CATALOG_CONFIG environment variable, then built-in defaults.
// Any field left out of the JSON file takes its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "COLLECTION_CATALOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Optional element seed (.json or .csv); built-in elements when absent
    #[serde(default)]
    pub elements_file: Option<PathBuf>,

    /// Ranked query keeps elements strictly below this rank
    #[serde(default = "default_rank_threshold")]
    pub rank_threshold: i64,

    /// Codes looked up against the catalog
    #[serde(default = "default_lookup_codes")]
    pub lookup_codes: Vec<String>,

    #[serde(default = "default_generator_first")]
    pub generator_first: i64,

    #[serde(default = "default_generator_last")]
    pub generator_last: i64,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rank_threshold() -> i64 {
    22
}

fn default_lookup_codes() -> Vec<String> {
    ["K", "Na", "Ca", "Cl", "Sc", "Ti"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_generator_first() -> i64 {
    5
}

fn default_generator_last() -> i64 {
    18
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            elements_file: None,
            rank_threshold: default_rank_threshold(),
            lookup_codes: default_lookup_codes(),
            generator_first: default_generator_first(),
            generator_last: default_generator_last(),
            log_level: default_log_level(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Resolve from command-line arguments (program name excluded) and environment
    pub fn resolve(args: &[String]) -> Result<Self> {
        match config_path(args)? {
            Some(path) => DemoConfig::from_file(path),
            None => Ok(DemoConfig::default()),
        }
    }
}

fn config_path(args: &[String]) -> Result<Option<PathBuf>> {
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        let path = args
            .get(pos + 1)
            .context("--config requires a path argument")?;
        return Ok(Some(PathBuf::from(path)));
    }

    Ok(env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

// ============================================================================
// TESTS
// ============================================================================
