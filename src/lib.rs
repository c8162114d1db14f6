//! Climaplot - city weather lookup pipeline
//!
//! This library provides the core functionality of a weather chart widget:
//! resolving a free-text city name to coordinates, fetching the hourly
//! temperature forecast for them, and reshaping the series into the labels,
//! values and style configuration a line-chart renderer consumes.

pub mod chart;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocoding;
pub mod models;
pub mod search;
pub mod transform;

// Re-export core types for public API
pub use chart::{ChartHandle, ChartRenderer, ChartSlot, ChartStyle};
pub use config::ClimaplotConfig;
pub use error::ClimaplotError;
pub use forecast::ForecastClient;
pub use geocoding::GeocodingClient;
pub use models::{ChartSeries, HourlySeries, Location};
pub use search::{SearchOrchestrator, SearchState};
pub use transform::to_chart_series;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ClimaplotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
