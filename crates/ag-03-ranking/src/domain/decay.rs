//! Exponential decay weights, `w(t) = exp(-lambda * t)`

use serde::{Deserialize, Serialize};
use shared_types::{Timestamp, MS_PER_HOUR};

use crate::error::RankingError;

/// Weight of a sample `elapsed` units old, for a half-life in the same units
///
/// Negative ages count as zero.
///
/// # Errors
/// `InvalidHalfLife` if `half_life` is not finite and positive.
pub fn decay_weight(elapsed: f64, half_life: f64) -> Result<f64, RankingError> {
    Ok(ExponentialDecay::from_half_life(half_life)?.weight(elapsed))
}

/// Decay rate `ln 2 / half_life`
pub fn decay_lambda(half_life: f64) -> Result<f64, RankingError> {
    ExponentialDecay::from_half_life(half_life).map(|decay| decay.lambda())
}

/// Sum of `(timestamp, value)` signals weighted by age in hours
pub fn time_weighted_sum(
    signals: &[(Timestamp, f64)],
    half_life_hours: f64,
    now: Timestamp,
) -> Result<f64, RankingError> {
    Ok(ExponentialDecay::from_half_life(half_life_hours)?.weighted_sum(signals, now))
}

/// Exponential decay with a fixed rate, measured in hours
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExponentialDecay {
    lambda: f64,
}

impl ExponentialDecay {
    pub fn from_half_life(half_life: f64) -> Result<Self, RankingError> {
        if !(half_life.is_finite() && half_life > 0.0) {
            return Err(RankingError::InvalidHalfLife { half_life });
        }
        Ok(Self {
            lambda: std::f64::consts::LN_2 / half_life,
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn half_life(&self) -> f64 {
        std::f64::consts::LN_2 / self.lambda
    }

    pub fn weight(&self, elapsed: f64) -> f64 {
        (-self.lambda * elapsed.max(0.0)).exp()
    }

    /// Sum of `value * weight(age_hours)` over `(timestamp, value)` samples
    pub fn weighted_sum(&self, samples: &[(Timestamp, f64)], now: Timestamp) -> f64 {
        samples
            .iter()
            .map(|&(at, value)| {
                let age_hours = now.saturating_sub(at) as f64 / MS_PER_HOUR as f64;
                value * self.weight(age_hours)
            })
            .sum()
    }
}
