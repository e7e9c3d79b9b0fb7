//! # Ranking Engine
//!
//! Stateless scoring functions for ordering community content and users.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`hot_score`] | Recency-weighted popularity for front-page ordering |
//! | [`wilson_score`] | Lower confidence bound on approval rate |
//! | [`bayesian_average`] | Rating shrunk toward the site-wide mean |
//! | [`decay_weight`] | Exponential age weighting |
//! | [`authority_scores`] | PageRank over user interactions |
//! | [`controversy_score`] | Volume of evenly split votes |
//!
//! All functions are pure and safe to call from any thread. Zero-vote and
//! empty-graph inputs return defined sentinels instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use ag_03_ranking::{wilson_score, bayesian_average};
//!
//! assert!(wilson_score(900, 1000) > wilson_score(9, 10));
//! assert_eq!(bayesian_average(5.0, 0, 3.5, 10.0), 3.5);
//! ```

pub mod domain;
pub mod error;

pub use domain::{
    authority_scores, bayesian_average, controversy_score, decay_lambda, decay_weight, hot_score,
    hot_score_at, time_weighted_sum, wilson_score, wilson_score_with_confidence, AuthorityConfig,
    AuthorityResult, ExponentialDecay, HotScoreConfig, Z_95,
};
pub use error::RankingError;
