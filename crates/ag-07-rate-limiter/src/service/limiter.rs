//! Keyed rate limiter
//!
//! Buckets are created on first use through the map's entry API, so
//! concurrent first requests for a key share one bucket. Each bucket has its
//! own mutex; unrelated keys never contend.

use std::sync::Arc;

use agora_telemetry::{components, log_component_event};
use dashmap::DashMap;
use parking_lot::Mutex;
use shared_types::{SystemTimeSource, TimeSource};

use crate::domain::{RateLimitConfig, TokenBucket};
use crate::error::LimiterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: DashMap<String, Arc<Mutex<TokenBucket>>>,
    time_source: Arc<dyn TimeSource>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl RateLimiter {
    /// Limiter on the system clock
    pub fn new(config: RateLimitConfig) -> Result<Self, LimiterError> {
        Self::with_time_source(config, Arc::new(SystemTimeSource))
    }

    pub fn with_time_source(
        config: RateLimitConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> Result<Self, LimiterError> {
        Self::with_metrics(config, time_source, Arc::new(NoOpMetrics))
    }

    pub fn with_metrics(
        config: RateLimitConfig,
        time_source: Arc<dyn TimeSource>,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self, LimiterError> {
        config.validate()?;
        log_component_event!(
            debug,
            components::RATE_LIMITER,
            "Rate limiter created",
            capacity = config.capacity,
            refill_interval_ms = config.refill_interval_ms
        );
        Ok(Self {
            config,
            buckets: DashMap::new(),
            time_source,
            metrics,
        })
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    fn bucket(&self, key: &str) -> Arc<Mutex<TokenBucket>> {
        if let Some(existing) = self.buckets.get(key) {
            return Arc::clone(existing.value());
        }
        let entry = self.buckets.entry(key.to_string()).or_insert_with(|| {
            self.metrics.record_bucket_created();
            Arc::new(Mutex::new(TokenBucket::new(
                &self.config,
                self.time_source.now(),
            )))
        });
        Arc::clone(entry.value())
    }

    /// Consume one token for `key`; `false` means throttled
    pub fn try_acquire(&self, key: &str) -> bool {
        let bucket = self.bucket(key);
        let allowed = bucket.lock().try_acquire(self.time_source.now());
        self.metrics.record_decision(allowed);
        if !allowed {
            log_component_event!(debug, components::RATE_LIMITER, "Request throttled", key = %key);
        }
        allowed
    }

    /// Tokens `key` could spend right now; unseen keys report full capacity
    pub fn remaining(&self, key: &str) -> u32 {
        let now = self.time_source.now();
        let tokens = match self.buckets.get(key) {
            Some(bucket) => bucket.lock().remaining(now),
            None => self.config.capacity,
        };
        u32::try_from(tokens).unwrap_or(u32::MAX)
    }

    /// Milliseconds until `key` may try again; 0 if a token is available
    pub fn retry_after_ms(&self, key: &str) -> u64 {
        let now = self.time_source.now();
        self.buckets
            .get(key)
            .map_or(0, |bucket| bucket.lock().retry_after_ms(now))
    }

    /// Forget `key`'s bucket; its next request starts with a full burst
    pub fn reset(&self, key: &str) -> bool {
        self.buckets.remove(key).is_some()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
