//! Domain Layer
//!
//! Single-threaded state machines. Synchronization lives in `service`.

pub mod history;
pub mod kalman;

pub use history::{Sample, SampleHistory};
pub use kalman::{KalmanConfig, LatencyEstimator, COVARIANCE_FLOOR};
