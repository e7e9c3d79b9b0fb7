//! Error types for the load forecaster
//!
//! Too little history is not an error: forecasts return `None` instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> ForecastError {
    ForecastError::InvalidConfiguration {
        field,
        reason: reason.into(),
    }
}
