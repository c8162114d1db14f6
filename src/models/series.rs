//! Hourly temperature series and its chart-ready form

use serde::{Deserialize, Serialize};

/// Raw hourly series as returned by the forecast provider.
///
/// `time[i]` corresponds to `temperature[i]` for all i; the forecast client
/// enforces equal lengths at the boundary and nothing downstream reorders
/// the samples.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlySeries {
    /// ISO-8601 local datetimes, e.g. "2024-03-05T14:00"
    pub time: Vec<String>,
    /// Temperature at 2 meters, in Celsius
    pub temperature: Vec<f64>,
}

impl HourlySeries {
    /// Number of hourly samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Display-ready series handed to the chart renderer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChartSeries {
    /// Axis labels, index-aligned with `values`
    pub labels: Vec<String>,
    /// Temperatures, copied through from the hourly series unchanged
    pub values: Vec<f64>,
    /// Chart title, e.g. "Madrid, España"
    pub title: String,
}
