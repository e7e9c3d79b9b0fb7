//! Per-domain filter registry
//!
//! One filter per logical domain ("usernames", "emails", ...). Creation is
//! compute-if-absent, so racing first uses of a domain share one filter.

use std::sync::Arc;

use dashmap::DashMap;

use super::shared_filter::SharedMembershipFilter;
use crate::domain::FilterConfig;
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Registry of named membership filters
pub struct FilterRegistry {
    filters: DashMap<String, Arc<SharedMembershipFilter>>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(NoOpMetrics))
    }

    pub fn with_metrics(metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            filters: DashMap::new(),
            metrics,
        }
    }

    /// Get the filter for `domain`, creating it with `config` on first use
    ///
    /// `config` is validated before the map is touched; it is ignored when
    /// the domain already exists.
    pub fn get_or_create(
        &self,
        domain: &str,
        config: &FilterConfig,
    ) -> Result<Arc<SharedMembershipFilter>, FilterError> {
        if let Some(existing) = self.filters.get(domain) {
            return Ok(Arc::clone(existing.value()));
        }
        config.validate()?;

        let entry = self.filters.entry(domain.to_string());
        let filter = entry.or_try_insert_with(|| {
            SharedMembershipFilter::with_metrics(domain, config, Arc::clone(&self.metrics))
                .map(Arc::new)
        })?;
        Ok(Arc::clone(filter.value()))
    }

    /// Register a filter restored from a snapshot, replacing any existing one
    pub fn insert(&self, filter: SharedMembershipFilter) -> Arc<SharedMembershipFilter> {
        let filter = Arc::new(filter);
        self.filters
            .insert(filter.name().to_string(), Arc::clone(&filter));
        filter
    }

    pub fn get(&self, domain: &str) -> Option<Arc<SharedMembershipFilter>> {
        self.filters.get(domain).map(|f| Arc::clone(f.value()))
    }

    /// Registered domain names, sorted
    pub fn domains(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
