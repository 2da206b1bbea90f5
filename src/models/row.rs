//! Joined weather and coordinate row exported to the renderer

use serde::{Deserialize, Serialize};

use super::{Geocoordinate, WeatherFact};

/// One location's joined record.
///
/// Field order is fixed and part of the export contract: city, maximum
/// temperature, description, latitude, longitude.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Row {
    pub city: String,
    pub max_temperature: i32,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Row {
    /// Join one weather fact with its matching coordinate pair.
    ///
    /// A row only exists when both underlying extractions succeeded; there is
    /// no partial row.
    #[must_use]
    pub fn compose(fact: WeatherFact, coordinate: Geocoordinate) -> Self {
        Self {
            city: fact.city,
            max_temperature: fact.max_temperature,
            description: fact.description,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}
