//! Metrics hooks for throttling decisions

use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for monitoring limiter behaviour
#[derive(Default)]
pub struct Metrics {
    /// Buckets created on first use of a key
    pub buckets_created: AtomicU64,
    /// Requests admitted
    pub requests_allowed: AtomicU64,
    /// Requests rejected for lack of tokens
    pub requests_throttled: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_bucket_created(&self) {
        self.buckets_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_decision(&self, allowed: bool) {
        let counter = if allowed {
            &self.requests_allowed
        } else {
            &self.requests_throttled
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            buckets_created: self.buckets_created.load(Ordering::Relaxed),
            requests_allowed: self.requests_allowed.load(Ordering::Relaxed),
            requests_throttled: self.requests_throttled.load(Ordering::Relaxed),
        }
    }

    /// Fraction of requests rejected; 0.0 before any request
    pub fn throttle_rate(&self) -> f64 {
        let snapshot = self.snapshot();
        let total = snapshot.requests_allowed + snapshot.requests_throttled;
        if total > 0 {
            snapshot.requests_throttled as f64 / total as f64
        } else {
            0.0
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.buckets_created,
            &self.requests_allowed,
            &self.requests_throttled,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub buckets_created: u64,
    pub requests_allowed: u64,
    pub requests_throttled: u64,
}

/// Forward limiter metrics to an external system
pub trait MetricsRecorder: Send + Sync {
    fn record_bucket_created(&self);
    fn record_decision(&self, allowed: bool);
}

#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_bucket_created(&self) {}
    fn record_decision(&self, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_bucket_created(&self) {
        Metrics::record_bucket_created(self);
    }

    fn record_decision(&self, allowed: bool) {
        Metrics::record_decision(self, allowed);
    }
}
