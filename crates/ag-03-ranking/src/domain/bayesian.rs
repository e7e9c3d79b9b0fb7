//! Bayesian average: shrinks an item's mean rating toward the global mean

/// `(C * global_avg + n * item_avg) / (C + n)`
///
/// `confidence` is the number of pseudo-ratings at the global mean. With no
/// ratings the result equals `global_avg`; as `item_count` grows it
/// approaches `item_avg`.
pub fn bayesian_average(item_avg: f64, item_count: u64, global_avg: f64, confidence: f64) -> f64 {
    let n = item_count as f64;
    let c = confidence.max(0.0);
    let weight = c + n;
    if weight == 0.0 {
        return global_avg;
    }
    (c * global_avg + n * item_avg) / weight
}
