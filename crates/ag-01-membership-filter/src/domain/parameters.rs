//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p0) / (ln(2)^2)  -- optimal bits
//! - k = round((m/n) * ln(2))   -- optimal hash functions
//! - p = (1 - e^(-kn/m))^k      -- false positive rate after n inserts

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Upper bound on hash functions; beyond this the bit cost per lookup
/// outweighs the FPR gain.
pub const MAX_HASH_COUNT: usize = 32;

/// Bloom filter sizing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// False positive rate once `capacity` elements are inserted
    pub expected_fpr: f64,
}

/// Validate the sizing inputs shared by every constructor.
pub fn validate_sizing(capacity: usize, target_fpr: f64) -> Result<(), FilterError> {
    if capacity == 0 {
        return Err(FilterError::invalid("expected_capacity", "must be > 0"));
    }
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::invalid(
            "target_fpr",
            format!("must be in (0, 1), got {target_fpr}"),
        ));
    }
    Ok(())
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `capacity` - Expected number of elements to insert (n)
/// * `target_fpr` - Target false positive rate (p0)
///
/// # Errors
/// `InvalidConfiguration` if capacity is zero or the rate is outside (0, 1).
pub fn calculate_optimal_parameters(
    capacity: usize,
    target_fpr: f64,
) -> Result<FilterParams, FilterError> {
    validate_sizing(capacity, target_fpr)?;

    let n = capacity as f64;
    let ln2_squared = LN_2 * LN_2;

    let m = ((-n * target_fpr.ln() / ln2_squared).ceil() as usize).max(1);
    let k = ((m as f64 / n) * LN_2).round() as usize;
    let k = k.clamp(1, MAX_HASH_COUNT);

    Ok(FilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, capacity, k),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
