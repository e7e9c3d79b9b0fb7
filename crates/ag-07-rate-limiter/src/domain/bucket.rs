//! Token bucket
//!
//! Refill adds `floor(elapsed / interval)` whole tokens, capped at capacity.
//! The refill timestamp moves only when a token is added, and then only by
//! the time those tokens account for, so rapid calls never discard partial
//! progress toward the next token. A full bucket restarts its clock: idle
//! time does not bank tokens beyond capacity.

use shared_types::Timestamp;

use super::config::RateLimitConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBucket {
    capacity: u64,
    refill_interval_ms: u64,
    available: u64,
    last_refill: Timestamp,
}

impl TokenBucket {
    /// A full bucket as of `now`
    pub fn new(config: &RateLimitConfig, now: Timestamp) -> Self {
        Self {
            capacity: config.capacity,
            refill_interval_ms: config.refill_interval_ms,
            available: config.capacity,
            last_refill: now,
        }
    }

    /// Tokens and refill timestamp as of `now`, without mutating
    fn refilled(&self, now: Timestamp) -> (u64, Timestamp) {
        let elapsed = now.saturating_sub(self.last_refill);
        let earned = elapsed / self.refill_interval_ms;
        if earned == 0 {
            return (self.available, self.last_refill);
        }
        let available = self.available.saturating_add(earned).min(self.capacity);
        let last_refill = if available == self.capacity {
            now
        } else {
            self.last_refill + earned * self.refill_interval_ms
        };
        (available, last_refill)
    }

    pub fn refill(&mut self, now: Timestamp) {
        (self.available, self.last_refill) = self.refilled(now);
    }

    /// Take one token if available
    pub fn try_acquire(&mut self, now: Timestamp) -> bool {
        self.refill(now);
        if self.available > 0 {
            self.available -= 1;
            true
        } else {
            false
        }
    }

    /// Tokens available at `now` (read-only refill)
    pub fn remaining(&self, now: Timestamp) -> u64 {
        self.refilled(now).0
    }

    /// Milliseconds until the next token; 0 when one is available now
    pub fn retry_after_ms(&self, now: Timestamp) -> u64 {
        let (available, last_refill) = self.refilled(now);
        if available > 0 {
            return 0;
        }
        (last_refill + self.refill_interval_ms).saturating_sub(now)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn last_refill(&self) -> Timestamp {
        self.last_refill
    }
}
