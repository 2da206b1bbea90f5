//! Fetch+parse collaborator: turns a location reference into a queryable
//! document tree.
//!
//! The extraction pipeline consumes this interface and never performs network
//! or parse calls of its own. Failures raised here are outside the pipeline's
//! taxonomy and propagate to callers untranslated.

use std::time::Duration;

use scraper::Html;
use thiserror::Error;
use tracing::debug;

use crate::config::WeatherMapConfig;

/// Transport and protocol failures from the collaborator
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },
}

/// Source of parsed documents for the two scraped namespaces
pub trait DocumentSource {
    /// Fetch and parse the weather document named by a source identifier
    fn weather_document(&self, source_url: &str) -> std::result::Result<Html, FetchError>;

    /// Fetch and parse the geocoding document for a normalized lookup key
    fn geocoding_document(&self, lookup_key: &str) -> std::result::Result<Html, FetchError>;
}

/// HTTP-backed document source
pub struct HttpDocumentSource {
    client: reqwest::blocking::Client,
    geocoding_base_url: String,
}

impl HttpDocumentSource {
    /// Create a source with the configured timeout, user agent and geocoding
    /// base URL
    #[must_use]
    pub fn new(config: &WeatherMapConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.http.timeout_seconds)))
            .user_agent(config.http.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            geocoding_base_url: config.geocoding.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn fetch(&self, url: &str) -> std::result::Result<Html, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        Ok(Html::parse_document(&body))
    }
}

impl DocumentSource for HttpDocumentSource {
    fn weather_document(&self, source_url: &str) -> std::result::Result<Html, FetchError> {
        self.fetch(source_url)
    }

    fn geocoding_document(&self, lookup_key: &str) -> std::result::Result<Html, FetchError> {
        let url = format!(
            "{}/{}",
            self.geocoding_base_url,
            urlencoding::encode(lookup_key)
        );
        self.fetch(&url)
    }
}
