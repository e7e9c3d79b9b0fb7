//! Service Layer

pub mod monitor;

pub use monitor::{EstimateSnapshot, LatencyMonitor, MonitorConfig};
