//! Thread-safe latency monitor
//!
//! Estimator and history sit behind one mutex, so readers never observe an
//! estimate paired with a stale covariance or a history that is missing the
//! sample the estimate already includes.

use std::sync::Arc;

use agora_telemetry::{components, log_component_event};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared_types::{SystemTimeSource, TimeSource, Timestamp};

use crate::domain::{KalmanConfig, LatencyEstimator, Sample, SampleHistory};
use crate::error::{invalid, EstimatorError};
use crate::ports::LatencyTracker;

/// Monitor configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub kalman: KalmanConfig,
    /// Samples retained for forecasting (one week of hourly samples by default)
    pub history_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            kalman: KalmanConfig::default(),
            history_capacity: 168,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), EstimatorError> {
        self.kalman.validate()?;
        if self.history_capacity == 0 {
            return Err(invalid("history_capacity", "must be at least 1"));
        }
        Ok(())
    }

    pub fn with_kalman(mut self, kalman: KalmanConfig) -> Self {
        self.kalman = kalman;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

/// Consistent view of the estimator state
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateSnapshot {
    pub estimate: f64,
    pub covariance: f64,
    pub confidence: f64,
    pub update_count: u64,
    pub last_sample_at: Option<Timestamp>,
}

struct MonitorState {
    estimator: LatencyEstimator,
    history: SampleHistory,
}

/// Latency estimate for one monitored signal (e.g. one server)
pub struct LatencyMonitor {
    name: String,
    state: Mutex<MonitorState>,
    time_source: Arc<dyn TimeSource>,
}

impl LatencyMonitor {
    pub fn new(name: impl Into<String>, config: &MonitorConfig) -> Result<Self, EstimatorError> {
        Self::with_time_source(name, config, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(
        name: impl Into<String>,
        config: &MonitorConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> Result<Self, EstimatorError> {
        config.validate()?;
        let name = name.into();
        let state = MonitorState {
            estimator: LatencyEstimator::new(config.kalman.clone())?,
            history: SampleHistory::new(config.history_capacity)?,
        };
        log_component_event!(
            debug,
            components::LATENCY_ESTIMATOR,
            "Latency monitor created",
            signal = %name,
            history_capacity = config.history_capacity
        );
        Ok(Self {
            name,
            state: Mutex::new(state),
            time_source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Estimate, covariance and confidence read under one lock
    pub fn snapshot(&self) -> EstimateSnapshot {
        let state = self.state.lock();
        EstimateSnapshot {
            estimate: state.estimator.estimate(),
            covariance: state.estimator.covariance(),
            confidence: state.estimator.confidence(),
            update_count: state.estimator.update_count(),
            last_sample_at: state.history.latest().map(|s| s.timestamp),
        }
    }

    /// Recorded values oldest first, for the load forecaster
    pub fn history_values(&self) -> Vec<f64> {
        self.state.lock().history.values()
    }

    pub fn history(&self) -> Vec<Sample> {
        self.state.lock().history.samples().copied().collect()
    }

    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }

    /// Reset the estimator; recorded history is kept
    pub fn reinitialize(&self) {
        self.state.lock().estimator.reinitialize();
        log_component_event!(
            info,
            components::LATENCY_ESTIMATOR,
            "Latency estimator reinitialized",
            signal = %self.name
        );
    }
}

impl LatencyTracker for LatencyMonitor {
    fn record(&self, measurement_ms: f64) -> Result<f64, EstimatorError> {
        if !measurement_ms.is_finite() {
            return Err(EstimatorError::InvalidMeasurement {
                value: measurement_ms,
            });
        }
        let now = self.time_source.now();
        let mut state = self.state.lock();
        let estimate = state.estimator.update(measurement_ms);
        state.history.push(now, measurement_ms);
        tracing::trace!(signal = %self.name, measurement_ms, estimate, "latency recorded");
        Ok(estimate)
    }

    fn estimate(&self) -> f64 {
        self.state.lock().estimator.estimate()
    }

    fn confidence(&self) -> f64 {
        self.state.lock().estimator.confidence()
    }
}
