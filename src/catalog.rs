// 📚 Catalog Service - keyed records with a single-step lookup
//
// Records are kept in build order; the map only holds positions into that
// vector, so a lookup is one hash probe and never a contains-then-index pair.

use crate::entities::Element;
use crate::error::{CatalogError, Result};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

// ============================================================================
// LOOKUP OUTCOME
// ============================================================================

/// Result of looking up one code. A miss is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    Found(&'a Element),
    NotFound(String),
}

impl<'a> LookupOutcome<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn element(&self) -> Option<&'a Element> {
        match self {
            LookupOutcome::Found(element) => Some(*element),
            LookupOutcome::NotFound(_) => None,
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in build order
    records: Vec<Element>,

    /// code -> position in `records`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from `(code, record)` pairs.
    ///
    /// Rejects empty codes, keys that disagree with the record's own code,
    /// and duplicate codes. Nothing is overwritten.
    pub fn build<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Element)>,
    {
        let mut catalog = Catalog::default();

        for (key, element) in entries {
            if element.code().is_empty() {
                return Err(CatalogError::EmptyCode {
                    name: element.name().to_string(),
                });
            }
            if key != element.code() {
                return Err(CatalogError::KeyMismatch {
                    key,
                    code: element.code().to_string(),
                });
            }
            if catalog.index.contains_key(&key) {
                warn!(code = %key, "rejecting duplicate catalog code");
                return Err(CatalogError::DuplicateCode(key));
            }

            catalog.index.insert(key, catalog.records.len());
            catalog.records.push(element);
        }

        debug!(records = catalog.records.len(), "catalog built");
        Ok(catalog)
    }

    /// Build a catalog keyed by each record's own code
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Element>,
    {
        Catalog::build(
            elements
                .into_iter()
                .map(|element| (element.code().to_string(), element)),
        )
    }

    /// Single lookup; `None` means the code is not in the catalog
    pub fn lookup(&self, code: &str) -> Option<&Element> {
        let found = self.index.get(code).map(|&pos| &self.records[pos]);
        trace!(code, found = found.is_some(), "catalog lookup");
        found
    }

    /// Look up several codes, reporting each hit or miss in request order
    pub fn lookup_all<'s, I>(&self, codes: I) -> Vec<LookupOutcome<'_>>
    where
        I: IntoIterator<Item = &'s str>,
    {
        codes
            .into_iter()
            .map(|code| match self.lookup(code) {
                Some(element) => LookupOutcome::Found(element),
                None => LookupOutcome::NotFound(code.to_string()),
            })
            .collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in build order
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Element] {
        &self.records
    }

    /// Companion sequence ordered by ascending rank (ties keep build order)
    pub fn ranked(&self) -> Vec<&Element> {
        let mut ranked: Vec<&Element> = self.records.iter().collect();
        ranked.sort_by_key(|element| element.rank());
        ranked
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
