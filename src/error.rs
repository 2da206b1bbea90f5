//! Error types for the weathermap pipeline

use thiserror::Error;

use crate::fetch::FetchError;

/// Failure taxonomy for extraction and aggregation.
///
/// Every variant is raised synchronously at the point of failure and
/// propagates unchanged through the aggregator; nothing is retried.
#[derive(Error, Debug)]
pub enum WeatherMapError {
    /// Identifier does not name a document in the weather namespace
    #[error("Invalid weather source: {0}")]
    InvalidSource(String),

    /// Weather document lacks the expected location node
    #[error("Location not found for {0}")]
    LocationNotFound(String),

    /// Weather document carries no parseable temperature value
    #[error("Temperature not found for {0}")]
    TemperatureNotFound(String),

    /// Geocoding document lacks the expected coordinate node
    #[error("Coordinates not found for {0}")]
    CoordinatesNotFound(String),

    /// Empty batch handed to the aggregator
    #[error("Invalid batch input: source list is empty")]
    InvalidBatchInput,

    /// Transport or protocol failure from the fetch collaborator,
    /// passed through untranslated
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// I/O failure while writing rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_error_names_the_lookup_key() {
        let err = WeatherMapError::CoordinatesNotFound("the-hague".to_string());
        assert_eq!(err.to_string(), "Coordinates not found for the-hague");
    }

    #[test]
    fn fetch_errors_keep_their_own_message() {
        let err = WeatherMapError::from(FetchError::Status {
            status: 503,
            url: "https://www.bbc.com/weather/2759794".to_string(),
        });
        assert!(err.to_string().contains("503"));
    }
}
