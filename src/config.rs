//! Configuration management for the weathermap pipeline
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all settings. The weather-source
//! namespace itself is fixed (see `schema`); only the geocoding endpoint,
//! HTTP behaviour, logging and output location are configurable.

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherMapConfig {
    /// Geocoding source configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Map output configuration
    #[serde(default)]
    pub map: MapConfig,
}

/// Geocoding source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the geocoding namespace; the normalized lookup key is
    /// appended as the final path segment
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Map output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Path the rendered map document is written to
    #[serde(default = "default_map_output")]
    pub output_path: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://www.geodatos.net/en/coordinates/netherlands".to_string()
}

fn default_http_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("weathermap/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_map_output() -> String {
    "netherlands_weather_map.html".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            output_path: default_map_output(),
        }
    }
}

impl Default for WeatherMapConfig {
    fn default() -> Self {
        Self {
            geocoding: GeocodingConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl WeatherMapConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from a specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with WEATHERMAP_ prefix
        builder = builder.add_source(
            Environment::with_prefix("WEATHERMAP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherMapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weathermap").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if !self.geocoding.base_url.starts_with("http://")
            && !self.geocoding.base_url.starts_with("https://")
        {
            bail!("Geocoding base URL must be a valid HTTP or HTTPS URL");
        }

        if self.http.timeout_seconds == 0 || self.http.timeout_seconds > 300 {
            bail!("HTTP timeout must be between 1 and 300 seconds");
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        if self.map.output_path.is_empty() {
            bail!("Map output path cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeatherMapConfig::default();
        assert_eq!(
            config.geocoding.base_url,
            "https://www.geodatos.net/en/coordinates/netherlands"
        );
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.map.output_path, "netherlands_weather_map.html");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WeatherMapConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = WeatherMapConfig::default();
        config.http.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let mut config = WeatherMapConfig::default();
        config.geocoding.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = WeatherMapConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("weathermap"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
