//! Pre-configured limits for common platform actions

use crate::domain::RateLimitConfig;

/// Login attempts (burst 5, then one per minute)
pub fn login_attempts() -> RateLimitConfig {
    RateLimitConfig {
        capacity: 5,
        refill_interval_ms: 60_000,
    }
}

/// Post creation (burst 10, then one every 30 seconds)
pub fn post_creation() -> RateLimitConfig {
    RateLimitConfig {
        capacity: 10,
        refill_interval_ms: 30_000,
    }
}

/// Chat messages (burst 20, then two per second)
pub fn chat_messages() -> RateLimitConfig {
    RateLimitConfig {
        capacity: 20,
        refill_interval_ms: 500,
    }
}

/// Read API (burst 100, then 50 per second)
pub fn api_reads() -> RateLimitConfig {
    RateLimitConfig {
        capacity: 100,
        refill_interval_ms: 20,
    }
}
