//! Scalar Kalman filter
//!
//! Per update:
//!
//! 1. Predict: `P = P + Q` (the estimate itself is carried forward)
//! 2. Gain: `K = P / (P + R)`
//! 3. Correct: `x = x + K * (z - x)`, `P = (1 - K) * P`
//!
//! `P` never drops below [`COVARIANCE_FLOOR`], so the gain stays defined
//! after long runs of identical measurements.

use serde::{Deserialize, Serialize};

use crate::error::{invalid, EstimatorError};

/// Lower bound on the error covariance
pub const COVARIANCE_FLOOR: f64 = 1e-9;

/// Filter tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KalmanConfig {
    /// Starting estimate before any measurement (ms)
    pub initial_estimate: f64,
    /// Starting uncertainty; large values let the first samples dominate
    pub initial_covariance: f64,
    /// Q: how much the true latency is expected to drift between samples
    pub process_noise: f64,
    /// R: variance of a single measurement
    pub measurement_noise: f64,
}

impl Default for KalmanConfig {
    fn default() -> Self {
        Self {
            initial_estimate: 0.0,
            initial_covariance: 1_000.0,
            process_noise: 0.1,
            measurement_noise: 4.0,
        }
    }
}

impl KalmanConfig {
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.initial_estimate.is_finite() {
            return Err(invalid("initial_estimate", "must be finite"));
        }
        positive("initial_covariance", self.initial_covariance)?;
        positive("process_noise", self.process_noise)?;
        positive("measurement_noise", self.measurement_noise)?;
        Ok(())
    }

    pub fn with_initial_estimate(mut self, estimate: f64) -> Self {
        self.initial_estimate = estimate;
        self
    }

    pub fn with_initial_covariance(mut self, covariance: f64) -> Self {
        self.initial_covariance = covariance;
        self
    }

    pub fn with_process_noise(mut self, q: f64) -> Self {
        self.process_noise = q;
        self
    }

    pub fn with_measurement_noise(mut self, r: f64) -> Self {
        self.measurement_noise = r;
        self
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), EstimatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite and > 0, got {value}")))
    }
}

/// Recursive estimate of one noisy signal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatencyEstimator {
    config: KalmanConfig,
    estimate: f64,
    covariance: f64,
    last_gain: f64,
    updates: u64,
}

impl LatencyEstimator {
    pub fn new(config: KalmanConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self {
            estimate: config.initial_estimate,
            covariance: config.initial_covariance,
            last_gain: 0.0,
            updates: 0,
            config,
        })
    }

    /// Fold in one measurement and return the corrected estimate
    ///
    /// Non-finite measurements leave the state untouched.
    pub fn update(&mut self, measurement: f64) -> f64 {
        if !measurement.is_finite() {
            tracing::warn!(measurement, "Ignoring non-finite latency measurement");
            return self.estimate;
        }

        let predicted = self.covariance + self.config.process_noise;
        let gain = predicted / (predicted + self.config.measurement_noise);

        self.estimate += gain * (measurement - self.estimate);
        self.covariance = ((1.0 - gain) * predicted).max(COVARIANCE_FLOOR);
        self.last_gain = gain;
        self.updates += 1;

        self.estimate
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn covariance(&self) -> f64 {
        self.covariance
    }

    /// Trust indicator in (0, 1], decreasing in covariance
    pub fn confidence(&self) -> f64 {
        1.0 / (1.0 + self.covariance)
    }

    /// Gain applied by the most recent update (0 before the first)
    pub fn gain(&self) -> f64 {
        self.last_gain
    }

    pub fn update_count(&self) -> u64 {
        self.updates
    }

    pub fn config(&self) -> &KalmanConfig {
        &self.config
    }

    /// Return to the configured initial state
    pub fn reinitialize(&mut self) {
        self.estimate = self.config.initial_estimate;
        self.covariance = self.config.initial_covariance;
        self.last_gain = 0.0;
        self.updates = 0;
    }
}
