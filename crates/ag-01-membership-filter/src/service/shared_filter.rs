//! Concurrent membership filter
//!
//! A coarse `RwLock` serializes inserts so no bit write is ever lost;
//! lookups proceed in parallel under the read lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use agora_telemetry::{components, log_component_event};
use parking_lot::RwLock;

use crate::domain::{FilterConfig, MembershipFilter};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::MembershipFilterApi;

/// Membership filter shared between request threads
pub struct SharedMembershipFilter {
    /// Logical domain the filter covers (e.g. "usernames")
    name: String,
    filter: RwLock<MembershipFilter>,
    metrics: Arc<dyn MetricsRecorder>,
    /// Set once the first over-capacity insert has been logged
    overflow_reported: AtomicBool,
}

impl SharedMembershipFilter {
    /// Create a named filter without metrics
    pub fn new(name: impl Into<String>, config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_metrics(name, config, Arc::new(NoOpMetrics))
    }

    /// Create a named filter reporting to `metrics`
    pub fn with_metrics(
        name: impl Into<String>,
        config: &FilterConfig,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self, FilterError> {
        let filter = MembershipFilter::from_config(config)?;
        Ok(Self::from_filter(name, filter, metrics))
    }

    /// Wrap an existing filter (e.g. one restored from a snapshot)
    pub fn from_filter(
        name: impl Into<String>,
        filter: MembershipFilter,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Self {
        let name = name.into();
        metrics.record_filter_created(filter.size_bits(), filter.hash_count(), filter.capacity());
        log_component_event!(
            info,
            components::MEMBERSHIP_FILTER,
            "Membership filter created",
            domain = %name,
            size_bits = filter.size_bits(),
            hash_count = filter.hash_count(),
            capacity = filter.capacity()
        );

        Self {
            overflow_reported: AtomicBool::new(filter.is_over_capacity()),
            name,
            filter: RwLock::new(filter),
            metrics,
        }
    }

    /// Logical domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert every key under a single write lock
    pub fn add_all<I, S>(&self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = self.filter.write();
        for key in keys {
            let start = Instant::now();
            filter.add(key.as_ref());
            let over = filter.is_over_capacity();
            self.metrics.record_insert(start.elapsed(), over);
            if over {
                self.report_overflow(filter.len(), filter.capacity(), filter.estimated_fpr());
            }
        }
    }

    /// Current false positive probability
    pub fn estimated_fpr(&self) -> f64 {
        self.filter.read().estimated_fpr()
    }

    /// Snapshot bytes for external persistence
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        self.filter.read().to_bytes()
    }

    /// Copy of the current filter state
    pub fn snapshot(&self) -> MembershipFilter {
        self.filter.read().clone()
    }

    fn report_overflow(&self, inserted: usize, capacity: usize, fpr: f64) {
        if !self.overflow_reported.swap(true, Ordering::Relaxed) {
            log_component_event!(
                warn,
                components::MEMBERSHIP_FILTER,
                "Membership filter exceeded planned capacity; false positive rate will climb",
                domain = %self.name,
                inserted,
                capacity,
                estimated_fpr = fpr
            );
        }
    }
}

impl MembershipFilterApi for SharedMembershipFilter {
    fn add(&self, key: &str) {
        self.add_all(std::iter::once(key));
    }

    fn might_contain(&self, key: &str) -> bool {
        let start = Instant::now();
        let found = self.filter.read().might_contain(key);
        self.metrics.record_lookup(start.elapsed(), found);
        found
    }

    fn len(&self) -> usize {
        self.filter.read().len()
    }
}
