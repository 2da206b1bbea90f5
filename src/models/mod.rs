//! Data models for the weathermap pipeline
//!
//! Core domain records organized by concern:
//! - Weather: facts extracted from one weather document
//! - Location: coordinate pairs resolved from the geocoding source
//! - Row: the joined record exported to the renderer

pub mod location;
pub mod row;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Geocoordinate;
pub use row::Row;
pub use weather::WeatherFact;
