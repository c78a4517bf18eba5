// 🌌 Galaxy Entity - mutable, ordered display only

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Galaxy {
    pub name: String,

    /// Distance in mega light years
    pub distance: i64,
}

impl Galaxy {
    pub fn new(name: impl Into<String>, distance: i64) -> Self {
        Galaxy {
            name: name.into(),
            distance,
        }
    }
}

impl fmt::Display for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.name, self.distance)
    }
}

pub fn default_galaxies() -> Vec<Galaxy> {
    vec![
        Galaxy::new("Tadpole", 400),
        Galaxy::new("Pinwheel", 25),
        Galaxy::new("Milky Way", 0),
        Galaxy::new("Andromeda", 3),
    ]
}
