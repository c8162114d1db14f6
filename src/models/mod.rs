//! Data models for the climaplot pipeline
//!
//! - Location: the best geocoding match for a city query
//! - Series: the raw hourly series and its chart-ready form

pub mod location;
pub mod series;

// Re-export all public types for convenient access
pub use location::Location;
pub use series::{ChartSeries, HourlySeries};
