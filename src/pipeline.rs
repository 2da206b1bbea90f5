//! Row aggregation: drives both extractors once per source identifier

use tracing::info;

use crate::error::{Result, WeatherMapError};
use crate::fetch::DocumentSource;
use crate::models::Row;
use crate::schema;
use crate::scrape::{extract_weather_fact, resolve_coordinates};

/// Build one row per weather-source identifier, in input order.
///
/// The batch is fail-fast and non-partial: the first failure from either
/// extractor, or from the fetch collaborator, aborts the whole call and
/// propagates unchanged. Callers needing partial results must wrap
/// identifiers individually. Output ordering mirrors input ordering; nothing
/// is deduplicated or sorted.
pub fn build_rows<S, I>(documents: &S, sources: &[I]) -> Result<Vec<Row>>
where
    S: DocumentSource,
    I: AsRef<str>,
{
    if sources.is_empty() {
        return Err(WeatherMapError::InvalidBatchInput);
    }

    let mut rows = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.as_ref();
        schema::validate_source(source)?;

        let weather_doc = documents.weather_document(source)?;
        let fact = extract_weather_fact(source, &weather_doc)?;
        let coordinate = resolve_coordinates(documents, &fact.city)?;

        info!(
            "Scraped {}: {}°C at ({}, {})",
            fact.city, fact.max_temperature, coordinate.latitude, coordinate.longitude
        );
        rows.push(Row::compose(fact, coordinate));
    }

    Ok(rows)
}
