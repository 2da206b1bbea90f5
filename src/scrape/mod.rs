//! Markup extraction for the two scraped namespaces
//!
//! - weather: fact extraction from an already-fetched weather document
//! - geocode: lookup-key normalization and coordinate resolution

pub mod geocode;
pub mod weather;

// Re-export commonly used operations from submodules
pub use geocode::{coordinates_from_document, normalize_city, resolve_coordinates};
pub use weather::extract_weather_fact;
