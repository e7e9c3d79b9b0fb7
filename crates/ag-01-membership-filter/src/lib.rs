//! # AG-01 Membership Filter
//!
//! Approximate "have I seen this key before" checks for the Agora platform
//! (usernames, emails, duplicate submissions) using Bloom filters.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no locking
//!   - `MembershipFilter`: bit array, k hash functions, insert count
//!   - `FilterConfig` / `FilterConfigBuilder`: sizing with validation
//!   - `calculate_optimal_parameters`: m and k from capacity and target rate
//!
//! - **Ports Layer** (`ports/`): `MembershipFilterApi` driving port
//!
//! - **Service Layer** (`service/`): Concurrency
//!   - `SharedMembershipFilter`: lock-guarded filter with metrics
//!   - `FilterRegistry`: one filter per logical domain
//!
//! ## Invariants
//!
//! - **No false negatives**: if `add(x)` was ever called, `might_contain(x)` is true
//! - **Bounded FPR**: FPR = (1 - e^(-kn/m))^k stays near the target while n <= capacity
//!
//! A hit is never authoritative. Callers must treat "might contain" as
//! "verify against the source of truth" and a miss as a definite negative.
//!
//! ## Usage Example
//!
//! ```ignore
//! use ag_01_membership_filter::{FilterConfig, MembershipFilterApi, SharedMembershipFilter};
//!
//! let config = FilterConfig::new(1_000_000, 0.01)?;
//! let usernames = SharedMembershipFilter::new("usernames", &config)?;
//!
//! usernames.add("alice");
//! if !usernames.might_contain("bob") {
//!     // definitely free, skip the database lookup
//! }
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{FilterConfig, FilterConfigBuilder, FilterParams, MembershipFilter};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::MembershipFilterApi;
pub use service::{FilterRegistry, SharedMembershipFilter};
