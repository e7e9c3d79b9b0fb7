//! Error types for ranking configuration

use thiserror::Error;

/// Invalid ranking parameters, reported at construction time
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankingError {
    #[error("Invalid half-life: {half_life} (must be finite and > 0)")]
    InvalidHalfLife { half_life: f64 },

    #[error("Invalid confidence level: {confidence} (must be in (0, 1))")]
    InvalidConfidence { confidence: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
