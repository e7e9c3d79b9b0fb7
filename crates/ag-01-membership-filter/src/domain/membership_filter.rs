//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `add(x)` returns, `might_contain(x)` is true
//! - FPR = (1 - e^(-kn/m))^k, bounded by the configured target while n <= capacity
//! - The filter never shrinks and never removes elements

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::FilterConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::{
    calculate_fpr, calculate_optimal_parameters, FilterParams, MAX_HASH_COUNT,
};
use crate::error::FilterError;

/// Bloom filter for approximate "have I seen this key before" checks
///
/// A hit means "verify against the source of truth"; a miss is an
/// unconditional negative and lets callers skip the expensive lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipFilter {
    /// Bit array storing the filter state
    #[serde(with = "bitvec_serde")]
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of inserts performed (n)
    n: usize,
    /// Planned number of distinct keys
    capacity: usize,
}

/// Serde support for BitVec
mod bitvec_serde {
    use bitvec::prelude::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bits: &BitVec<u8, Lsb0>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (bits.as_raw_slice(), bits.len()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec<u8, Lsb0>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (bytes, len): (Vec<u8>, usize) = Deserialize::deserialize(deserializer)?;
        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(bits)
    }
}

impl MembershipFilter {
    /// Create a filter sized for `capacity` keys at false positive rate `target_fpr`
    ///
    /// # Errors
    /// `InvalidConfiguration` if capacity is zero or `target_fpr` is outside (0, 1).
    pub fn with_capacity(capacity: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(capacity, target_fpr)?;
        Ok(Self::from_params(params, capacity))
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_capacity(config.expected_capacity, config.target_fpr)
    }

    fn from_params(params: FilterParams, capacity: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bits],
            k: params.hash_count,
            m: params.size_bits,
            n: 0,
            capacity,
        }
    }

    /// Insert a key
    ///
    /// After insertion, `might_contain(key)` is guaranteed to return true.
    pub fn add(&mut self, key: &str) {
        self.add_bytes(key.as_bytes());
    }

    /// Insert raw bytes
    pub fn add_bytes(&mut self, element: &[u8]) {
        for pos in compute_hash_positions(element, self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Insert every key from an iterator
    pub fn add_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
    }

    /// Test if a key might have been inserted
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be a false positive)
    /// - `false` if the key is definitely NOT in the set (never a false negative)
    pub fn might_contain(&self, key: &str) -> bool {
        self.might_contain_bytes(key.as_bytes())
    }

    /// Byte-level variant of [`might_contain`](Self::might_contain)
    pub fn might_contain_bytes(&self, element: &[u8]) -> bool {
        compute_hash_positions(element, self.k, self.m)
            .iter()
            .all(|&pos| self.bits[pos])
    }

    /// Current false positive probability given the inserts so far
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Whether more keys were inserted than the filter was sized for
    pub fn is_over_capacity(&self) -> bool {
        self.n > self.capacity
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of inserts performed
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Planned number of distinct keys
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serialize the filter so an external store can persist it
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        bincode::serialize(self).map_err(|e| FilterError::Snapshot(e.to_string()))
    }

    /// Restore a filter from a snapshot produced by [`to_bytes`](Self::to_bytes)
    ///
    /// # Errors
    /// `Snapshot` if the bytes do not decode or describe an impossible filter
    /// (bit length mismatch, zero size or capacity, hash count outside
    /// `1..=MAX_HASH_COUNT`).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let filter: Self =
            bincode::deserialize(bytes).map_err(|e| FilterError::Snapshot(e.to_string()))?;
        if filter.bits.len() != filter.m
            || filter.m == 0
            || filter.k == 0
            || filter.k > MAX_HASH_COUNT
            || filter.capacity == 0
        {
            return Err(FilterError::Snapshot(format!(
                "inconsistent snapshot: m={} bits={} k={} capacity={}",
                filter.m,
                filter.bits.len(),
                filter.k,
                filter.capacity
            )));
        }
        Ok(filter)
    }
}
