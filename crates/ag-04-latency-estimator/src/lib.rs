//! # Latency Estimator
//!
//! Smooths noisy latency probes into a stable estimate with a scalar Kalman
//! filter, and keeps a bounded history of raw samples for load forecasting.
//!
//! ## Architecture
//!
//! - `domain`: [`LatencyEstimator`] state machine and [`SampleHistory`] ring buffer
//! - `service`: [`LatencyMonitor`], mutex-guarded estimator plus history
//! - `ports`: [`LatencyTracker`] driving port
//!
//! ## Example
//!
//! ```rust
//! use ag_04_latency_estimator::{KalmanConfig, LatencyEstimator};
//!
//! let mut estimator = LatencyEstimator::new(KalmanConfig::default()).unwrap();
//! for sample in [102.0, 98.0, 101.0, 99.0] {
//!     estimator.update(sample);
//! }
//! assert!((estimator.estimate() - 100.0).abs() < 5.0);
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{KalmanConfig, LatencyEstimator, Sample, SampleHistory, COVARIANCE_FLOOR};
pub use error::EstimatorError;
pub use ports::LatencyTracker;
pub use service::{EstimateSnapshot, LatencyMonitor, MonitorConfig};
