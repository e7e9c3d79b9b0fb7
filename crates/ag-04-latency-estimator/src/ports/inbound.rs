//! Inbound Ports (Driving Ports)

use crate::error::EstimatorError;

/// Latency tracking API (Driving Port)
///
/// Written by a periodic probe, read by request threads choosing where to
/// route traffic.
pub trait LatencyTracker: Send + Sync {
    /// Record a measurement in milliseconds and return the new estimate
    fn record(&self, measurement_ms: f64) -> Result<f64, EstimatorError>;

    /// Current estimate in milliseconds
    fn estimate(&self) -> f64;

    /// Trust indicator in (0, 1]
    fn confidence(&self) -> f64;
}
