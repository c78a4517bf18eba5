// Entity Models
//
// - Element: immutable record with a unique code (chemical symbol)
// - Galaxy: mutable record, only ever shown in order

pub mod element;
pub mod galaxy;

pub use element::{default_elements, Element};
pub use galaxy::{default_galaxies, Galaxy};
