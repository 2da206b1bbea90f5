//! Lookup-key normalization and coordinate resolution

use scraper::Html;
use tracing::debug;

use crate::error::{Result, WeatherMapError};
use crate::fetch::DocumentSource;
use crate::models::Geocoordinate;
use crate::schema;

/// Normalize a city name into the lookup key the geocoding source indexes by.
///
/// Lowercase with every space replaced by a hyphen. The transform is lossy;
/// composite names round-trip because the lookup source applies the same one.
#[must_use]
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase().replace(' ', "-")
}

/// Resolve a city name to its coordinate pair via the geocoding source
pub fn resolve_coordinates<S: DocumentSource>(documents: &S, city: &str) -> Result<Geocoordinate> {
    let key = normalize_city(city);
    debug!("Resolving coordinates for {}", key);

    let doc = documents.geocoding_document(&key)?;
    coordinates_from_document(&doc, &key)
}

/// Extract the (latitude, longitude) pair from an already-fetched geocoding
/// document.
///
/// Failures name the normalized key, not the original city name.
pub fn coordinates_from_document(doc: &Html, key: &str) -> Result<Geocoordinate> {
    let node = doc
        .select(&schema::COORDINATE_PAIR)
        .next()
        .ok_or_else(|| WeatherMapError::CoordinatesNotFound(key.to_string()))?;

    let text = node.text().collect::<String>();
    parse_coordinate_pair(&text).ok_or_else(|| WeatherMapError::CoordinatesNotFound(key.to_string()))
}

/// Parse a "latitude, longitude" text pair in decimal degrees
fn parse_coordinate_pair(text: &str) -> Option<Geocoordinate> {
    let (latitude, longitude) = text.trim().split_once(',')?;
    Some(Geocoordinate {
        latitude: latitude.trim().parse().ok()?,
        longitude: longitude.trim().parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const THE_HAGUE_PAGE: &str = r#"<html><body>
  <h1>The Hague, Netherlands</h1>
  <p class="font-bold text-blue-500 mt-3 lg:text-lg">52.07667, 4.29861</p>
</body></html>"#;

    #[rstest]
    #[case("the hague")]
    #[case("The Hague")]
    #[case("the-hague")]
    #[case("The-Hague")]
    fn normalization_is_case_and_separator_insensitive(#[case] input: &str) {
        assert_eq!(normalize_city(input), "the-hague");
    }

    #[test]
    fn extracts_the_coordinate_pair_in_latitude_longitude_order() {
        let doc = Html::parse_document(THE_HAGUE_PAGE);
        let coordinate = coordinates_from_document(&doc, "the-hague").unwrap();

        assert_eq!(coordinate.latitude, 52.07667);
        assert_eq!(coordinate.longitude, 4.29861);
    }

    #[test]
    fn missing_pair_names_the_normalized_key() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        let err = coordinates_from_document(&doc, "astremdam").unwrap_err();
        assert_eq!(err.to_string(), "Coordinates not found for astremdam");
    }

    #[test]
    fn malformed_pair_is_coordinates_not_found() {
        let page = r#"<p class="font-bold text-blue-500 mt-3 lg:text-lg">not a number</p>"#;
        let doc = Html::parse_document(page);
        let err = coordinates_from_document(&doc, "rotterdam").unwrap_err();
        assert!(matches!(err, WeatherMapError::CoordinatesNotFound(_)));
    }
}
