//! Markup fact extraction from a weather document

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{Result, WeatherMapError};
use crate::models::WeatherFact;
use crate::schema;

/// Extract the city name, maximum temperature and conditions description from
/// an already-fetched weather document.
///
/// The identifier must name a document in the weather namespace. The document
/// must carry the location heading, today's detail block, a description node
/// and a temperature value with at least one digit run; a page missing the
/// expected structure is reported against the identifier that produced it.
pub fn extract_weather_fact(source: &str, doc: &Html) -> Result<WeatherFact> {
    schema::validate_source(source)?;

    let location = doc
        .select(&schema::LOCATION_NAME)
        .next()
        .ok_or_else(|| WeatherMapError::LocationNotFound(source.to_string()))?;
    let city = node_text(location);

    // A location heading without today's detail block is a mis-shaped page.
    let details = doc
        .select(&schema::DAY_DETAILS)
        .next()
        .ok_or_else(|| WeatherMapError::LocationNotFound(source.to_string()))?;

    let description = details
        .select(&schema::WEATHER_DESCRIPTION)
        .next()
        .map(node_text)
        .ok_or_else(|| WeatherMapError::LocationNotFound(source.to_string()))?;

    // The first temperature value in the block is the daily maximum; a value
    // with no digit run at all is a hard failure, never a silent absence.
    let max_temperature = details
        .select(&schema::TEMPERATURE_C)
        .next()
        .and_then(|node| parse_temperature(&node_text(node)))
        .ok_or_else(|| WeatherMapError::TemperatureNotFound(source.to_string()))?;

    debug!(
        "Extracted {}: {}°C, {}",
        city, max_temperature, description
    );

    Ok(WeatherFact {
        city,
        max_temperature,
        description,
    })
}

/// Text content of a node with surrounding whitespace trimmed
fn node_text(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// First maximal run of decimal digits, parsed as an integer.
///
/// The markup embeds a degree symbol and other annotation around the number.
fn parse_temperature(raw: &str) -> Option<i32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: String = raw[start..].chars().take_while(char::is_ascii_digit).collect();
    run.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://www.bbc.com/weather/2759794";

    const AMSTERDAM_PAGE: &str = r#"<html><body>
  <h1 class="wr-c-location__name gel-paragon">
    Amsterdam
  </h1>
  <div class="wr-day__details">
    <div class="wr-day__details__weather-type-description">Partly cloudy and light winds</div>
    <span class="wr-value--temperature--c">14°</span>
    <span class="wr-value--temperature--c">9°</span>
  </div>
</body></html>"#;

    #[test]
    fn extracts_city_temperature_and_description() {
        let doc = Html::parse_document(AMSTERDAM_PAGE);
        let fact = extract_weather_fact(SOURCE, &doc).unwrap();

        assert_eq!(fact.city, "Amsterdam");
        assert_eq!(fact.max_temperature, 14);
        assert!(fact.max_temperature > -100 && fact.max_temperature < 70);
        assert_eq!(fact.description, "Partly cloudy and light winds");
    }

    #[test]
    fn first_temperature_value_wins_over_the_minimum() {
        let doc = Html::parse_document(AMSTERDAM_PAGE);
        let fact = extract_weather_fact(SOURCE, &doc).unwrap();
        assert_ne!(fact.max_temperature, 9);
    }

    #[test]
    fn rejects_identifier_outside_the_weather_namespace() {
        let doc = Html::parse_document(AMSTERDAM_PAGE);
        let err = extract_weather_fact("https://www.amazon.com/", &doc).unwrap_err();
        assert!(matches!(err, WeatherMapError::InvalidSource(_)));
    }

    #[test]
    fn missing_location_heading_is_location_not_found() {
        let doc = Html::parse_document("<html><body><p>No such place</p></body></html>");
        let err = extract_weather_fact(SOURCE, &doc).unwrap_err();
        assert!(matches!(err, WeatherMapError::LocationNotFound(_)));
    }

    #[test]
    fn missing_detail_block_is_location_not_found() {
        let page = r#"<html><body>
  <h1 class="wr-c-location__name gel-paragon">Amsterdam</h1>
</body></html>"#;
        let doc = Html::parse_document(page);
        let err = extract_weather_fact(SOURCE, &doc).unwrap_err();
        assert!(matches!(err, WeatherMapError::LocationNotFound(_)));
    }

    #[test]
    fn temperature_without_digits_is_temperature_not_found() {
        let page = AMSTERDAM_PAGE.replace("14°", "--°").replace("9°", "--°");
        let doc = Html::parse_document(&page);
        let err = extract_weather_fact(SOURCE, &doc).unwrap_err();
        assert!(matches!(err, WeatherMapError::TemperatureNotFound(_)));
    }

    #[test]
    fn digit_runs_parse_through_surrounding_annotation() {
        assert_eq!(parse_temperature("14°"), Some(14));
        assert_eq!(parse_temperature("['14°']"), Some(14));
        assert_eq!(parse_temperature("max 21° today"), Some(21));
        assert_eq!(parse_temperature("--°"), None);
        assert_eq!(parse_temperature(""), None);
    }
}
