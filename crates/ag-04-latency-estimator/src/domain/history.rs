//! Bounded sample history
//!
//! Fixed-capacity ring buffer of timestamped measurements; the oldest sample
//! is evicted first. The load forecaster consumes `values()` read-only.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

use crate::error::{invalid, EstimatorError};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: Timestamp,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SampleHistory {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleHistory {
    pub fn new(capacity: usize) -> Result<Self, EstimatorError> {
        if capacity == 0 {
            return Err(invalid("history_capacity", "must be at least 1"));
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, timestamp: Timestamp, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { timestamp, value });
    }

    /// Values oldest first
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
