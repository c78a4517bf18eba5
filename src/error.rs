// ⚠️ Catalog Errors
// Lookup misses are not errors (they come back as None); only contract
// violations and rejected builds end up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries supplied the same code while building a catalog
    #[error("duplicate code in catalog: {0}")]
    DuplicateCode(String),

    /// A record was supplied with an empty code
    #[error("record code must not be empty (name: {name})")]
    EmptyCode { name: String },

    /// Map key and record code disagree
    #[error("key {key} does not match record code {code}")]
    KeyMismatch { key: String, code: String },

    /// Positional removal outside `[0, len)`
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
