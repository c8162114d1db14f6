//! Error types and handling for the climaplot pipeline

use thiserror::Error;

/// Fallback message shown when a failure has no dedicated user text
const GENERIC_USER_MESSAGE: &str = "Ocurrió un error al obtener los datos.";

/// Main error type for the weather pipeline
#[derive(Error, Debug)]
pub enum ClimaplotError {
    /// Geocoding returned no candidate for the query
    #[error("Ciudad no encontrada. Intenta con otro nombre.")]
    NotFound,

    /// Network or body-decoding failure from either endpoint
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The provider returned series data that violates index alignment
    #[error("Data shape error: {message}")]
    DataShape { message: String },

    /// The chart renderer rejected the series
    #[error("Render error: {message}")]
    Render { message: String },
}

impl ClimaplotError {
    /// Create a new data shape error
    pub fn data_shape<S: Into<String>>(message: S) -> Self {
        Self::DataShape {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Message surfaced on the error panel.
    ///
    /// Only a failed geocoding lookup carries its own text; every other
    /// failure collapses into the generic message, matching the widget's
    /// single undifferentiated error surface.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ClimaplotError::NotFound => self.to_string(),
            _ => GENERIC_USER_MESSAGE.to_string(),
        }
    }
}
