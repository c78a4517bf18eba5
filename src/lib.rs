// Collection Catalog - Core Library
// Keyed catalog, filter+sort queries, mutable sequences and a bounded generator

pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod generator;
pub mod query;
pub mod seed;
pub mod sequence;

// Re-export commonly used types
pub use catalog::{Catalog, LookupOutcome};
pub use config::DemoConfig;
pub use entities::{default_elements, default_galaxies, Element, Galaxy};
pub use error::{CatalogError, Result};
pub use generator::{even_sequence, is_even, BoundedSequence};
pub use query::{elements_below, filter_sorted, FilterSorted};
pub use seed::{load_elements, load_elements_csv, load_elements_json};
pub use sequence::Sequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
