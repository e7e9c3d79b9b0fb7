//! Service Layer

pub mod limiter;

pub use limiter::RateLimiter;
