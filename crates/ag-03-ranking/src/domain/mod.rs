//! Domain Layer - Pure scoring functions
//!
//! RULES:
//! - No shared state, no I/O
//! - Counts are already validated and non-negative
//! - Zero-vote and empty-graph inputs return a defined sentinel, never panic

pub mod authority;
pub mod bayesian;
pub mod controversy;
pub mod decay;
pub mod hot;
pub mod wilson;

pub use authority::{authority_scores, AuthorityConfig, AuthorityResult};
pub use bayesian::bayesian_average;
pub use controversy::controversy_score;
pub use decay::{decay_lambda, decay_weight, time_weighted_sum, ExponentialDecay};
pub use hot::{hot_score, hot_score_at, HotScoreConfig};
pub use wilson::{wilson_score, wilson_score_with_confidence, Z_95};
