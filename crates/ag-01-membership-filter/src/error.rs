//! Error types for the membership filter

use thiserror::Error;

/// Errors that can occur in the membership filter subsystem
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl FilterError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
