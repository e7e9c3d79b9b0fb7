//! Error types for the social graph

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// A node cannot befriend itself; accepting it would inflate its degree
    #[error("Self-loop edges are not allowed")]
    SelfLoop,

    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> GraphError {
    GraphError::InvalidConfiguration {
        field,
        reason: reason.into(),
    }
}
