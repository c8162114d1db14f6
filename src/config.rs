//! Configuration for the pipeline clients
//!
//! The widget talks to two Open-Meteo services; both endpoints and the
//! response language live here so tests can point the clients at a mock
//! server. There is no config file and no environment lookup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoints and request settings for the geocoding and forecast clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimaplotConfig {
    /// Base URL of the geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Base URL of the hourly forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Response language for geocoding display names
    #[serde(default = "default_language")]
    pub language: String,
    /// Optional request timeout in seconds. The widget historically ran
    /// without one; a hung request then stays in Loading indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_language() -> String {
    "es".to_string()
}

impl Default for ClimaplotConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            language: default_language(),
            timeout_seconds: None,
        }
    }
}

impl ClimaplotConfig {
    /// Build the HTTP client shared by both pipeline clients
    pub fn build_client(&self) -> crate::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = self.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_open_meteo() {
        let config = ClimaplotConfig::default();
        assert!(config.geocoding_url.contains("geocoding-api.open-meteo.com"));
        assert!(config.forecast_url.contains("api.open-meteo.com"));
        assert_eq!(config.language, "es");
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_deserialization_fills_defaults() {
        let config: ClimaplotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.geocoding_url, default_geocoding_url());
        assert_eq!(config.forecast_url, default_forecast_url());
    }
}
