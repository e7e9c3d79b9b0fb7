//! Time-decayed, vote-weighted "hot" score
//!
//! Computed in log space:
//!
//! ```text
//! hot = sign(net) * ln(1 + |net|) + view_weight * ln(1 + views) - gravity * ln(age_hours + 2)
//! ```
//!
//! which is the logarithm of a hyperbolic decay `votes / (age + 2)^gravity`.
//! The score is continuous in age, strictly decreasing as the item ages and
//! strictly increasing in net upvotes.

use serde::{Deserialize, Serialize};
use shared_types::{SystemTimeSource, TimeSource, Timestamp, MS_PER_HOUR};

use crate::error::RankingError;

/// Hot score tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotScoreConfig {
    /// Decay exponent; higher values sink old content faster
    pub gravity: f64,
    /// Weight of the log view count relative to the log vote differential
    pub view_weight: f64,
}

impl Default for HotScoreConfig {
    fn default() -> Self {
        Self {
            gravity: 1.8,
            view_weight: 0.1,
        }
    }
}

impl HotScoreConfig {
    pub fn new(gravity: f64, view_weight: f64) -> Result<Self, RankingError> {
        let config = Self {
            gravity,
            view_weight,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(RankingError::InvalidConfiguration(format!(
                "gravity must be finite and > 0, got {}",
                self.gravity
            )));
        }
        if !(self.view_weight.is_finite() && self.view_weight >= 0.0) {
            return Err(RankingError::InvalidConfiguration(format!(
                "view_weight must be finite and >= 0, got {}",
                self.view_weight
            )));
        }
        Ok(())
    }
}

/// Hot score as of the current wall-clock time with default tuning
pub fn hot_score(upvotes: u64, downvotes: u64, created_at: Timestamp, views: u64) -> f64 {
    hot_score_at(
        upvotes,
        downvotes,
        created_at,
        views,
        SystemTimeSource.now(),
        &HotScoreConfig::default(),
    )
}

/// Hot score as of `now`
///
/// Items created after `now` (clock skew) are treated as brand new.
pub fn hot_score_at(
    upvotes: u64,
    downvotes: u64,
    created_at: Timestamp,
    views: u64,
    now: Timestamp,
    config: &HotScoreConfig,
) -> f64 {
    let net = upvotes as f64 - downvotes as f64;
    let vote_term = net.signum() * net.abs().ln_1p();
    let view_term = config.view_weight * (views as f64).ln_1p();

    let age_hours = now.saturating_sub(created_at) as f64 / MS_PER_HOUR as f64;
    let decay_term = config.gravity * (age_hours + 2.0).ln();

    vote_term + view_term - decay_term
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Timestamp = 1_700_000_000_000;

    fn score(up: u64, down: u64, age_ms: u64) -> f64 {
        hot_score_at(up, down, NOW - age_ms, 0, NOW, &HotScoreConfig::default())
    }

    #[test]
    fn test_zero_votes_is_defined() {
        let s = score(0, 0, 0);
        assert!(s.is_finite());
        assert!((s + 1.8 * 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_strictly_decreasing_in_age() {
        let mut previous = f64::INFINITY;
        for minutes in [0u64, 1, 30, 60, 600, 6_000, 60_000] {
            let s = score(10, 2, minutes * 60_000);
            assert!(s < previous, "score must drop as the post ages");
            previous = s;
        }
    }

    #[test]
    fn test_negative_posts_also_sink() {
        assert!(score(0, 50, 0) > score(0, 50, MS_PER_HOUR));
    }

    #[test]
    fn test_strictly_increasing_in_net_votes() {
        let mut previous = f64::NEG_INFINITY;
        for up in 0..50 {
            let s = score(up, 10, MS_PER_HOUR);
            assert!(s > previous, "one more upvote must raise the score");
            previous = s;
        }
    }

    #[test]
    fn test_no_jump_at_day_boundary() {
        let before = score(100, 0, 24 * MS_PER_HOUR - 1);
        let after = score(100, 0, 24 * MS_PER_HOUR + 1);
        assert!(before > after);
        assert!(before - after < 1e-6);
    }

    #[test]
    fn test_future_timestamp_treated_as_new() {
        let config = HotScoreConfig::default();
        let future = hot_score_at(5, 0, NOW + 10_000, 0, NOW, &config);
        let fresh = hot_score_at(5, 0, NOW, 0, NOW, &config);
        assert_eq!(future, fresh);
    }

    #[test]
    fn test_views_boost() {
        let config = HotScoreConfig::default();
        let quiet = hot_score_at(5, 0, NOW, 0, NOW, &config);
        let busy = hot_score_at(5, 0, NOW, 10_000, NOW, &config);
        assert!(busy > quiet);
    }

    #[test]
    fn test_config_validation() {
        assert!(HotScoreConfig::new(0.0, 0.1).is_err());
        assert!(HotScoreConfig::new(1.5, -1.0).is_err());
        assert!(HotScoreConfig::new(1.5, 0.0).is_ok());
    }

    #[test]
    fn test_wall_clock_variant_is_finite() {
        assert!(hot_score(3, 1, 0, 10).is_finite());
    }
}
