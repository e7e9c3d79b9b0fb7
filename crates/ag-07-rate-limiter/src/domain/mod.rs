//! Domain Layer - Single-bucket arithmetic, no locking

pub mod bucket;
pub mod config;

pub use bucket::TokenBucket;
pub use config::RateLimitConfig;
