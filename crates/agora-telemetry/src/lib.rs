//! # Agora Telemetry
//!
//! Structured logging for the Agora algorithmic core.
//!
//! Every component crate logs through `tracing` macros only. The host
//! process installs a subscriber once at startup through this crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agora_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Component events are now emitted as structured logs
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AGORA_SERVICE_NAME` | `agora-core` | Service name stamped on startup |
//! | `AGORA_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `AGORA_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `AGORA_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_tracing, TracingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Component identifiers stamped on log events.
pub mod components {
    pub const MEMBERSHIP_FILTER: &str = "membership-filter";
    pub const PASSWORD_STRENGTH: &str = "password-strength";
    pub const RANKING: &str = "ranking";
    pub const LATENCY_ESTIMATOR: &str = "latency-estimator";
    pub const LOAD_FORECAST: &str = "load-forecast";
    pub const SOCIAL_GRAPH: &str = "social-graph";
    pub const RATE_LIMITER: &str = "rate-limiter";
}
