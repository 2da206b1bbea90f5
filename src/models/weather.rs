//! Weather fact extracted from a single weather document

use serde::{Deserialize, Serialize};

/// Structured record scraped from one weather page.
///
/// Produced once per extraction call; the city name is the join key into the
/// geocoding lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherFact {
    /// City name as printed on the page
    pub city: String,
    /// Maximum temperature in degrees Celsius
    pub max_temperature: i32,
    /// Description of current conditions
    pub description: String,
}
