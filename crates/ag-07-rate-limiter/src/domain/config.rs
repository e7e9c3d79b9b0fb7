//! Rate limit configuration

use serde::{Deserialize, Serialize};

use crate::error::LimiterError;

/// Burst of `capacity` requests, then one request per `refill_interval_ms`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub capacity: u64,
    pub refill_interval_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: 60,
            refill_interval_ms: 1_000,
        }
    }
}

impl RateLimitConfig {
    /// Validated configuration; zero capacity or interval is rejected
    pub fn new(capacity: u64, refill_interval_ms: u64) -> Result<Self, LimiterError> {
        let config = Self {
            capacity,
            refill_interval_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LimiterError> {
        if self.capacity == 0 {
            return Err(LimiterError::InvalidConfiguration {
                field: "capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.refill_interval_ms == 0 {
            return Err(LimiterError::InvalidConfiguration {
                field: "refill_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_refill_interval_ms(mut self, refill_interval_ms: u64) -> Self {
        self.refill_interval_ms = refill_interval_ms;
        self
    }

    /// Sustained throughput once the burst is spent
    pub fn requests_per_second(&self) -> f64 {
        1_000.0 / self.refill_interval_ms as f64
    }
}
