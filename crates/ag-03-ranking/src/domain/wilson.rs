//! Lower bound of the Wilson score confidence interval
//!
//! Ranks items by "how good could the approval rate plausibly be, at worst",
//! so that 9 of 10 upvotes does not outrank 900 of 1000.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::RankingError;

/// Two-sided z-value for 95% confidence
pub const Z_95: f64 = 1.959_963_984_540_054;

/// Wilson lower bound at 95% confidence
///
/// Returns 0.0 when there are no votes or no positive votes. `positive` greater than `total`
/// is clamped to `total`.
pub fn wilson_score(positive: u64, total: u64) -> f64 {
    wilson_lower_bound(positive, total, Z_95)
}

/// Wilson lower bound at an arbitrary two-sided confidence level in (0, 1)
pub fn wilson_score_with_confidence(
    positive: u64,
    total: u64,
    confidence: f64,
) -> Result<f64, RankingError> {
    Ok(wilson_lower_bound(positive, total, z_for_confidence(confidence)?))
}

fn z_for_confidence(confidence: f64) -> Result<f64, RankingError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(RankingError::InvalidConfidence { confidence });
    }
    let standard = Normal::new(0.0, 1.0)
        .map_err(|e| RankingError::InvalidConfiguration(e.to_string()))?;
    Ok(standard.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

fn wilson_lower_bound(positive: u64, total: u64, z: f64) -> f64 {
    // centre - spread cancels to rounding noise when nothing is positive
    if total == 0 || positive == 0 {
        return 0.0;
    }
    let n = total as f64;
    let p = positive.min(total) as f64 / n;
    let z2 = z * z;

    let centre = p + z2 / (2.0 * n);
    let spread = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();
    let lower = (centre - spread) / (1.0 + z2 / n);

    lower.clamp(0.0, 1.0)
}
