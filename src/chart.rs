//! Chart renderer seam and declarative style configuration
//!
//! Rendering is delegated to an external collaborator behind the
//! `ChartRenderer` trait. This module owns what the widget hands to it: the
//! temperature-to-colour threshold table, the option block, and the slot
//! that guarantees a previous chart instance is released before the next
//! one attaches to the same surface.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::models::ChartSeries;

/// Declarative style for the temperature line chart.
///
/// The colour thresholds apply per-point and per-segment: at or below
/// `cool_max` the cool colour is used, at or above `hot_min` the hot
/// colour, otherwise the neutral one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Values at or below this are drawn in the cool colour
    pub cool_max: f64,
    /// Values at or above this are drawn in the hot colour
    pub hot_min: f64,
    pub cool_color: String,
    pub hot_color: String,
    pub neutral_color: String,
    /// Fill colour of the data points
    pub point_fill: String,
    pub point_radius: u32,
    pub point_border_width: u32,
    pub line_width: u32,
    /// Curve tension of the line between points
    pub tension: f64,
    /// Upper bound on x-axis ticks; the full 7x24 series is handed over
    /// untouched and thinned here, not in the transformer
    pub max_ticks: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            cool_max: 10.0,
            hot_min: 30.0,
            cool_color: "#2e86de".to_string(),
            hot_color: "#ff4d4d".to_string(),
            neutral_color: "#4b5563".to_string(),
            point_fill: "#ffffff".to_string(),
            point_radius: 4,
            point_border_width: 2,
            line_width: 2,
            tension: 0.4,
            max_ticks: 10,
        }
    }
}

impl ChartStyle {
    /// Colour for a single point, or for the segment starting at it
    #[must_use]
    pub fn color_for(&self, value: f64) -> &str {
        if value >= self.hot_min {
            &self.hot_color
        } else if value <= self.cool_max {
            &self.cool_color
        } else {
            &self.neutral_color
        }
    }

    /// Dataset label shown in the chart legend
    #[must_use]
    pub fn dataset_label(&self, title: &str) -> String {
        format!("Temperatura en {title} (°C)")
    }

    /// Option block in the shape the charting collaborator consumes
    #[must_use]
    pub fn to_options(&self) -> Value {
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": {
                "intersect": false,
                "mode": "index"
            },
            "plugins": {
                "legend": { "display": true, "position": "top" },
                "tooltip": { "enabled": true }
            },
            "scales": {
                "y": {
                    "beginAtZero": false,
                    "title": { "display": true, "text": "Temperatura (°C)" }
                },
                "x": {
                    "title": { "display": true, "text": "Línea de Tiempo (Días / Horas)" },
                    "ticks": { "maxTicksLimit": self.max_ticks }
                }
            }
        })
    }
}

/// A rendered chart instance attached to the surface.
///
/// Exactly one instance may be attached at a time; `destroy` releases it
/// and must run before a replacement attaches.
pub trait ChartHandle: Send {
    fn destroy(&mut self);
}

/// External rendering collaborator
pub trait ChartRenderer: Send + Sync {
    /// Attach a new chart for `series` to the surface
    fn render(&self, series: &ChartSeries, style: &ChartStyle) -> crate::Result<Box<dyn ChartHandle>>;
}

/// Owned slot for the current chart instance.
///
/// Replaces the widget's bare global handle: storing a new instance
/// destroys the held one first, and dropping the slot destroys whatever
/// is still attached. This holds across rapid repeated searches.
#[derive(Default)]
pub struct ChartSlot {
    current: Option<Box<dyn ChartHandle>>,
}

impl ChartSlot {
    /// Destroy any held instance, then store the new one
    pub fn replace(&mut self, handle: Box<dyn ChartHandle>) {
        self.release();
        self.current = Some(handle);
    }

    /// Destroy and drop the held instance, if any
    pub fn release(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.destroy();
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for ChartSlot {
    fn drop(&mut self) {
        self.release();
    }
}
