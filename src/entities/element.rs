// 🧪 Element Entity - immutable keyed record
//
// code = chemical symbol ("K", "Ca"), rank = atomic number.
// Fields are private so a record can't change once it sits in a catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    code: String,
    name: String,
    rank: i64,
}

impl Element {
    /// Create a new element record
    pub fn new(code: impl Into<String>, name: impl Into<String>, rank: i64) -> Self {
        Element {
            code: code.into(),
            name: name.into(),
            rank,
        }
    }

    /// Short unique code (chemical symbol)
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordering rank (atomic number)
    pub fn rank(&self) -> i64 {
        self.rank
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.code, self.name, self.rank)
    }
}

/// The four period-4 elements the demo catalog starts with
pub fn default_elements() -> Vec<Element> {
    vec![
        Element::new("K", "Potassium", 19),
        Element::new("Ca", "Calcium", 20),
        Element::new("Sc", "Scandium", 21),
        Element::new("Ti", "Titanium", 22),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let element = Element::new("K", "Potassium", 19);

        assert_eq!(element.code(), "K");
        assert_eq!(element.name(), "Potassium");
        assert_eq!(element.rank(), 19);
        assert_eq!(element.to_string(), "K Potassium 19");
    }

    #[test]
    fn test_default_elements() {
        let elements = default_elements();
        let codes: Vec<&str> = elements.iter().map(|e| e.code()).collect();

        assert_eq!(codes, vec!["K", "Ca", "Sc", "Ti"]);
    }

    #[test]
    fn test_element_json_shape() {
        let element = Element::new("Sc", "Scandium", 21);
        let json = serde_json::to_value(&element).unwrap();

        assert_eq!(json, serde_json::json!({"code": "Sc", "name": "Scandium", "rank": 21}));
    }
}
