//! Membership filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use ag_01_membership_filter::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_capacity(100_000)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, validate_sizing, FilterParams};
use crate::error::FilterError;

/// Filter sizing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of distinct keys the filter is planned for (n)
    pub expected_capacity: usize,
    /// Desired false positive rate at planned capacity (p0), in (0, 1)
    pub target_fpr: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_capacity: 100_000,
            target_fpr: 0.01,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_capacity: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_capacity,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject non-positive capacity and rates outside (0, 1)
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_sizing(self.expected_capacity, self.target_fpr)
    }

    /// Derived bit-array size and hash count
    pub fn params(&self) -> Result<FilterParams, FilterError> {
        calculate_optimal_parameters(self.expected_capacity, self.target_fpr)
    }

    /// Builder-style method to set the planned capacity
    pub fn with_expected_capacity(mut self, capacity: usize) -> Self {
        self.expected_capacity = capacity;
        self
    }

    /// Builder-style method to set the target false positive rate
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_capacity: Option<usize>,
    target_fpr: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the planned number of distinct keys
    pub fn expected_capacity(mut self, capacity: usize) -> Self {
        self.expected_capacity = Some(capacity);
        self
    }

    /// Set target false positive rate (must be in (0, 1))
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for internal use only)
    pub fn build_unchecked(self) -> FilterConfig {
        let defaults = FilterConfig::default();

        FilterConfig {
            expected_capacity: self.expected_capacity.unwrap_or(defaults.expected_capacity),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
        }
    }
}
