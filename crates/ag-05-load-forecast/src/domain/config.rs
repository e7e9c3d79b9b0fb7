//! Forecast configuration

use serde::{Deserialize, Serialize};

use crate::error::{invalid, ForecastError};

/// How each simulated hour is drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseModel {
    /// Normal distribution with the empirical mean and standard deviation
    #[default]
    Gaussian,
    /// Uniform resample of an observed value
    Bootstrap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Samples required before a forecast is produced (one day of hourly data)
    pub min_history: usize,
    /// Percentile reported as the lower bound, in [0, 100]
    pub lower_percentile: f64,
    /// Percentile reported as the upper bound, in [0, 100]
    pub upper_percentile: f64,
    /// Requested trials above this are clamped
    pub max_trials: u32,
    /// Requested horizons above this are clamped (one week)
    pub max_hours: u32,
    pub noise_model: NoiseModel,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_history: 24,
            lower_percentile: 5.0,
            upper_percentile: 95.0,
            max_trials: 20_000,
            max_hours: 168,
            noise_model: NoiseModel::Gaussian,
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.min_history < 2 {
            return Err(invalid("min_history", "must be at least 2"));
        }
        for (field, p) in [
            ("lower_percentile", self.lower_percentile),
            ("upper_percentile", self.upper_percentile),
        ] {
            if !(0.0..=100.0).contains(&p) {
                return Err(invalid(field, format!("must be in [0, 100], got {p}")));
            }
        }
        if self.lower_percentile > self.upper_percentile {
            return Err(invalid(
                "lower_percentile",
                "must not exceed upper_percentile",
            ));
        }
        if self.max_trials == 0 {
            return Err(invalid("max_trials", "must be at least 1"));
        }
        if self.max_hours == 0 {
            return Err(invalid("max_hours", "must be at least 1"));
        }
        Ok(())
    }

    pub fn with_min_history(mut self, min_history: usize) -> Self {
        self.min_history = min_history;
        self
    }

    pub fn with_percentiles(mut self, lower: f64, upper: f64) -> Self {
        self.lower_percentile = lower;
        self.upper_percentile = upper;
        self
    }

    pub fn with_noise_model(mut self, noise_model: NoiseModel) -> Self {
        self.noise_model = noise_model;
        self
    }

    pub fn with_max_trials(mut self, max_trials: u32) -> Self {
        self.max_trials = max_trials;
        self
    }

    pub fn with_max_hours(mut self, max_hours: u32) -> Self {
        self.max_hours = max_hours;
        self
    }
}
