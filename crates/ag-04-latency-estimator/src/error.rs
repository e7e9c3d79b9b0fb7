//! Error types for the latency estimator

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("Measurement must be finite, got {value}")]
    InvalidMeasurement { value: f64 },
}

pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> EstimatorError {
    EstimatorError::InvalidConfiguration {
        field,
        reason: reason.into(),
    }
}
