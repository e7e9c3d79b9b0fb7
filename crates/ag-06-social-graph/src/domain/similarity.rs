//! Neighborhood similarity signals

use std::hash::Hash;

use super::graph::SocialGraph;

/// `|N(a) ∩ N(b)| / |N(a) ∪ N(b)|`; 0.0 when both neighborhoods are empty
pub fn jaccard_similarity<T>(graph: &SocialGraph<T>, a: &T, b: &T) -> f64
where
    T: Eq + Hash + Ord + Clone,
{
    let (Some(na), Some(nb)) = (graph.neighbors(a), graph.neighbors(b)) else {
        return 0.0;
    };
    let shared = na.intersection(nb).count();
    let union = na.len() + nb.len() - shared;
    if union == 0 {
        return 0.0;
    }
    shared as f64 / union as f64
}

/// Sum over common neighbors `z` of `1 / ln(degree(z))`
///
/// A common neighbor of two distinct nodes has degree at least 2, so every
/// term is finite; degree-1 neighbors (only reachable when `a == b`) add
/// nothing.
pub fn adamic_adar<T>(graph: &SocialGraph<T>, a: &T, b: &T) -> f64
where
    T: Eq + Hash + Ord + Clone,
{
    graph
        .common_neighbors(a, b)
        .into_iter()
        .map(|z| graph.degree(z))
        .filter(|&degree| degree > 1)
        .map(|degree| 1.0 / (degree as f64).ln())
        .sum()
}
