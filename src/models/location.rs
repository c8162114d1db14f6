//! Location model for geocoding results

use serde::{Deserialize, Serialize};

/// Best-match location for a city query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Display name in the configured response language
    pub name: String,
    /// Country name in the configured response language
    pub country: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country,
        }
    }

    /// Chart title for this location, e.g. "Madrid, España"
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}
