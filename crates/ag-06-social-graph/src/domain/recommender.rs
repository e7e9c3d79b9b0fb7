//! Friend recommendation
//!
//! Candidates are friends-of-friends that are not already friends. Each
//! signal is min-max normalized over the candidate set, then combined with
//! the configured weights. Ordering is by descending combined score, then by
//! ascending node id.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::config::RecommenderConfig;
use super::graph::SocialGraph;
use super::pagerank::personalized_pagerank;
use super::similarity::{adamic_adar, jaccard_similarity};

/// Scores are compared at this resolution so that candidates whose sums
/// differ only by rounding are ordered by id
const SCORE_RESOLUTION: f64 = 1e9;

/// A ranked candidate with its per-signal breakdown (raw, unnormalized)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<T> {
    pub node: T,
    pub score: f64,
    pub jaccard: f64,
    pub pagerank: f64,
    pub adamic_adar: f64,
}

/// Up to `limit` recommendations for `node`
///
/// Unknown or isolated nodes get an empty list. `config` is assumed valid.
pub fn recommend_friends_scored<T>(
    graph: &SocialGraph<T>,
    node: &T,
    limit: usize,
    config: &RecommenderConfig,
) -> Vec<Recommendation<T>>
where
    T: Eq + Hash + Ord + Clone,
{
    let Some(friends) = graph.neighbors(node) else {
        return Vec::new();
    };
    if limit == 0 || friends.is_empty() {
        return Vec::new();
    }

    let candidates: BTreeSet<&T> = friends
        .iter()
        .filter_map(|friend| graph.neighbors(friend))
        .flatten()
        .filter(|c| *c != node && !friends.contains(*c))
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let ppr = personalized_pagerank(graph, node, config);

    let mut scored: Vec<Recommendation<T>> = candidates
        .into_iter()
        .map(|candidate| Recommendation {
            node: candidate.clone(),
            score: 0.0,
            jaccard: jaccard_similarity(graph, node, candidate),
            pagerank: ppr.score(candidate),
            adamic_adar: adamic_adar(graph, node, candidate),
        })
        .collect();

    let jaccard = Normalizer::fit(scored.iter().map(|r| r.jaccard));
    let pagerank = Normalizer::fit(scored.iter().map(|r| r.pagerank));
    let aa = Normalizer::fit(scored.iter().map(|r| r.adamic_adar));

    for rec in &mut scored {
        rec.score = config.jaccard_weight * jaccard.apply(rec.jaccard)
            + config.pagerank_weight * pagerank.apply(rec.pagerank)
            + config.adamic_adar_weight * aa.apply(rec.adamic_adar);
    }

    scored.sort_by(|a, b| {
        Reverse(rank_key(a.score))
            .cmp(&Reverse(rank_key(b.score)))
            .then_with(|| a.node.cmp(&b.node))
    });
    scored.truncate(limit);
    scored
}

impl<T> SocialGraph<T>
where
    T: Eq + Hash + Ord + Clone,
{
    /// Up to `limit` recommended node ids with the default weighting
    pub fn recommend_friends(&self, node: &T, limit: usize) -> Vec<T> {
        recommend_friends_scored(self, node, limit, &RecommenderConfig::default())
            .into_iter()
            .map(|rec| rec.node)
            .collect()
    }
}

fn rank_key(score: f64) -> i64 {
    (score * SCORE_RESOLUTION).round() as i64
}

/// Spread below this fraction of the maximum is rounding noise
const RELATIVE_SPREAD_FLOOR: f64 = 1e-9;

/// Min-max scaling to [0, 1]
///
/// A signal that is constant across candidates carries no ranking
/// information: it maps to 1.0 if positive and 0.0 otherwise.
struct Normalizer {
    min: f64,
    max: f64,
}

impl Normalizer {
    fn fit(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Self { min, max }
    }

    fn apply(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > self.max.abs() * RELATIVE_SPREAD_FLOOR {
            (value - self.min) / range
        } else if self.max > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}
