//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - The Bloom filter bit array and its insert/query operations
//! - Hash position derivation
//! - Optimal sizing from capacity and false-positive target
//! - Configuration and validation
//!
//! RULES:
//! - No I/O operations
//! - No locking (the service layer owns synchronization)

pub mod config;
pub mod hash_functions;
pub mod membership_filter;
pub mod parameters;

pub use config::{FilterConfig, FilterConfigBuilder};
pub use membership_filter::MembershipFilter;
pub use parameters::{calculate_fpr, calculate_optimal_parameters, FilterParams};
