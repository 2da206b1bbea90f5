use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use weathermap::config::WeatherMapConfig;
use weathermap::fetch::HttpDocumentSource;
use weathermap::map::{self, MapOptions};
use weathermap::pipeline;

/// Reference batch: weather documents for Dutch cities
const DUTCH_CITY_SOURCES: &[&str] = &[
    "https://www.bbc.com/weather/2759794",
    "https://www.bbc.com/weather/2755003",
    "https://www.bbc.com/weather/2747373",
    "https://www.bbc.com/weather/2745912",
    "https://www.bbc.com/weather/2743477",
    "https://www.bbc.com/weather/2755420",
    "https://www.bbc.com/weather/2759706",
    "https://www.bbc.com/weather/2755251",
    "https://www.bbc.com/weather/2751738",
    "https://www.bbc.com/weather/2757220",
    "https://www.bbc.com/weather/2756136",
];

fn main() -> Result<()> {
    let config = WeatherMapConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sources: Vec<String> = if args.is_empty() {
        DUTCH_CITY_SOURCES.iter().map(ToString::to_string).collect()
    } else {
        args
    };

    let documents = HttpDocumentSource::new(&config);
    let rows = pipeline::build_rows(&documents, &sources)?;

    for row in &rows {
        println!(
            "{}: {}°C, {} ({}, {})",
            row.city, row.max_temperature, row.description, row.latitude, row.longitude
        );
    }

    map::write_map(&rows, &MapOptions::default(), &config.map.output_path)?;
    println!("Wrote weather map to {}", config.map.output_path);

    Ok(())
}
