//! Document schema contract for the two scraped sources.
//!
//! Every selector literal and namespace constant lives here. A markup format
//! change on either source is an edit to this module only; the extraction
//! logic never carries its own selectors.

use std::sync::LazyLock;

use scraper::Selector;

use crate::error::{Result, WeatherMapError};

/// Namespace prefix required of weather-source identifiers
pub const WEATHER_SOURCE_PREFIX: &str = "https://www.bbc.com/weather/";

/// Today's detail block on a weather page
pub static DAY_DETAILS: LazyLock<Selector> = LazyLock::new(|| selector(".wr-day__details"));

/// Location name heading, selected at document scope
pub static LOCATION_NAME: LazyLock<Selector> =
    LazyLock::new(|| selector(".wr-c-location__name.gel-paragon"));

/// Weather type description inside the detail block
pub static WEATHER_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(".wr-day__details__weather-type-description"));

/// Celsius temperature values inside the detail block; the first is the daily maximum
pub static TEMPERATURE_C: LazyLock<Selector> =
    LazyLock::new(|| selector(".wr-value--temperature--c"));

/// Coordinate paragraph on a geocoding page
pub static COORDINATE_PAIR: LazyLock<Selector> =
    LazyLock::new(|| selector("p.font-bold.text-blue-500.mt-3.lg\\:text-lg"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal must parse")
}

/// Check that an identifier names a document in the weather namespace
pub fn validate_source(source: &str) -> Result<()> {
    if source.starts_with(WEATHER_SOURCE_PREFIX) {
        Ok(())
    } else {
        Err(WeatherMapError::InvalidSource(source.to_string()))
    }
}
