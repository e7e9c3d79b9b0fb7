//! # Rate Limiter
//!
//! Per-key token buckets: a key may burst up to `capacity` requests, then
//! earns one token per `refill_interval_ms`.
//!
//! ## Usage Example
//!
//! ```rust
//! use ag_07_rate_limiter::{presets, RateLimiter};
//!
//! let limiter = RateLimiter::new(presets::login_attempts()).unwrap();
//! for _ in 0..5 {
//!     assert!(limiter.try_acquire("user:42"));
//! }
//! assert!(!limiter.try_acquire("user:42"));
//! assert_eq!(limiter.remaining("user:7"), 5);
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod presets;
pub mod service;

pub use domain::{RateLimitConfig, TokenBucket};
pub use error::LimiterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::RateLimiter;
