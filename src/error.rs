//! Error types for montepi.
//!
//! All fallible operations return `Result<T, PiError>` instead of
//! panicking. Errors propagate to the CLI top level; none are retried or
//! silently swallowed.

use thiserror::Error;

/// Result type alias for montepi operations.
pub type PiResult<T> = Result<T, PiError>;

/// Unified error type for all montepi operations.
#[derive(Debug, Error)]
pub enum PiError {
    // ===== Argument Errors =====
    /// Estimator invoked with zero samples.
    #[error("sample count must be at least 1")]
    ZeroSamples,

    /// Sample-size sweep bounds are inverted.
    #[error("invalid sample-size range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound of the sweep.
        min: u64,
        /// Upper bound of the sweep.
        max: u64,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering failure.
    #[error("render error: {message}")]
    Render {
        /// Underlying cause reported by the drawing backend.
        message: String,
    },

    /// Reporter invoked with nothing to plot.
    #[error("cannot render an empty result series")]
    EmptySeries,
}

impl PiError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a render error from any displayable backend failure.
    #[must_use]
    pub fn render(cause: impl std::fmt::Display) -> Self {
        Self::Render {
            message: cause.to_string(),
        }
    }
}
