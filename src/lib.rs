//! weathermap - weather-page scraping into map-ready rows
//!
//! This library converts semi-structured weather-page and geocoding-page
//! markup into small validated records, joins them into one row per source
//! identifier, and renders the aggregate onto a city weather map.

pub mod category;
pub mod config;
pub mod error;
pub mod fetch;
pub mod map;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod scrape;

// Re-export core types for the public API
pub use category::{Category, classify};
pub use config::WeatherMapConfig;
pub use error::{Result, WeatherMapError};
pub use fetch::{DocumentSource, FetchError, HttpDocumentSource};
pub use models::{Geocoordinate, Row, WeatherFact};
pub use pipeline::build_rows;
pub use scrape::{extract_weather_fact, normalize_city, resolve_coordinates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
