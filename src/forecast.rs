//! Forecast client for the Open-Meteo hourly temperature API
//!
//! Fetches 2-meter temperatures for the provider's default forward window
//! (typically 7 days x 24 hours) in the location's local timezone. No date
//! range is requested explicitly; the default window is accepted as-is.

use reqwest::Client;
use tracing::{debug, info};

use crate::ClimaplotError;
use crate::config::ClimaplotConfig;
use crate::models::HourlySeries;

/// Client for fetching hourly temperature forecasts
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a client against the configured forecast endpoint
    #[must_use]
    pub fn new(client: Client, config: &ClimaplotConfig) -> Self {
        Self {
            client,
            base_url: config.forecast_url.clone(),
        }
    }

    /// Fetch the hourly temperature series for the given coordinates.
    ///
    /// The coordinates are the ones the geocoding client returned for the
    /// same search; no independent range validation happens here. Index
    /// alignment of the returned arrays is checked at this boundary and a
    /// violation fails with `DataShape` instead of leaving downstream
    /// indexing undefined.
    pub async fn fetch_hourly(&self, latitude: f64, longitude: f64) -> crate::Result<HourlySeries> {
        debug!("Fetching hourly forecast for ({}, {})", latitude, longitude);

        let url = format!(
            "{}?latitude={latitude}&longitude={longitude}&hourly=temperature_2m&timezone=auto",
            self.base_url
        );

        let response: api::ForecastResponse =
            self.client.get(&url).send().await?.json().await?;

        let hourly = response
            .hourly
            .ok_or_else(|| ClimaplotError::data_shape("response carried no hourly block"))?;

        if hourly.time.len() != hourly.temperature_2m.len() {
            return Err(ClimaplotError::data_shape(format!(
                "{} timestamps but {} temperatures",
                hourly.time.len(),
                hourly.temperature_2m.len()
            )));
        }

        info!("Fetched {} hourly samples", hourly.time.len());
        Ok(HourlySeries {
            time: hourly.time,
            temperature: hourly.temperature_2m,
        })
    }
}

/// Open-Meteo forecast response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyBlock>,
    }

    #[derive(Debug, Deserialize)]
    pub struct HourlyBlock {
        pub time: Vec<String>,
        pub temperature_2m: Vec<f64>,
    }
}
