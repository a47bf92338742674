use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the cost model library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the vehicle type does not normalize to a known configuration.
    #[error("vehicle type not recognized: '{value}' (expected 'tiltwing' or 'helicopter')")]
    InvalidVehicleType { value: String },

    /// Raised when an input used as a divisor is exactly zero.
    #[error("input {input} must be non-zero; it is used as a divisor")]
    DivisionByZero { input: &'static str },

    /// Raised when a calibration override is unusable.
    #[error("invalid calibration: {message}")]
    InvalidCalibration { message: String },

    /// Raised when a named output lookup does not match any field.
    #[error("unknown output name: {name}{}", format_suggestions(.suggestions))]
    UnknownOutput {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a scenario or calibration file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
