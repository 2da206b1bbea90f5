//! Display category classification for temperature bands

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse temperature band used purely for marker styling
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blue,
    Green,
    Red,
}

impl Category {
    /// CSS colour name for this band
    #[must_use]
    pub fn colour(self) -> &'static str {
        match self {
            Category::Blue => "blue",
            Category::Green => "green",
            Category::Red => "red",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.colour())
    }
}

/// Classify a maximum temperature into its display band.
///
/// Thresholds are half-open: below 10 is blue, 10 up to but excluding 20 is
/// green, 20 and above is red.
#[must_use]
pub fn classify(max_temperature: i32) -> Category {
    if max_temperature < 10 {
        Category::Blue
    } else if max_temperature < 20 {
        Category::Green
    } else {
        Category::Red
    }
}
