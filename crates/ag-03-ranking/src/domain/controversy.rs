//! Controversy: high when votes are both numerous and evenly split

/// `balance * ln(1 + up + down)` with `balance = min / max`
///
/// Zero when either side has no votes; near zero when one side dominates.
pub fn controversy_score(upvotes: u64, downvotes: u64) -> f64 {
    if upvotes == 0 || downvotes == 0 {
        return 0.0;
    }
    let (low, high) = if upvotes < downvotes {
        (upvotes, downvotes)
    } else {
        (downvotes, upvotes)
    };
    let balance = low as f64 / high as f64;
    let magnitude = upvotes as f64 + downvotes as f64;
    balance * magnitude.ln_1p()
}
