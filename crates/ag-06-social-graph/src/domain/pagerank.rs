//! Personalized PageRank (random walk with restart)
//!
//! Only the root's connected component can receive mass, so iteration runs
//! over that component alone. Nodes outside it score 0 and are omitted.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::hash::Hash;

use super::config::RecommenderConfig;
use super::graph::SocialGraph;

/// Visit probabilities plus convergence diagnostics
#[derive(Clone, Debug, PartialEq)]
pub struct PageRankResult<T: Eq + Hash> {
    pub scores: HashMap<T, f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl<T: Eq + Hash> PageRankResult<T> {
    fn empty() -> Self {
        Self {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        }
    }

    pub fn score(&self, node: &T) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

/// Stationary visit probabilities of a walk that restarts at `root`
///
/// Uses `restart_probability`, `max_iterations` and `tolerance` from
/// `config`, which is assumed valid. Iteration stops at `max_iterations`
/// even if the L1 change has not dropped below `tolerance`; `converged`
/// reports which happened. Unknown roots yield an empty result.
pub fn personalized_pagerank<T>(
    graph: &SocialGraph<T>,
    root: &T,
    config: &RecommenderConfig,
) -> PageRankResult<T>
where
    T: Eq + Hash + Ord + Clone,
{
    if !graph.contains_node(root) {
        return PageRankResult::empty();
    }

    let component = connected_component(graph, root);
    let index: HashMap<&T, usize> = component.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    let neighbors: Vec<Vec<usize>> = component
        .iter()
        .map(|node| {
            graph
                .neighbors(node)
                .map(|set| set.iter().filter_map(|n| index.get(n).copied()).collect())
                .unwrap_or_default()
        })
        .collect();

    let root_idx = index[root];
    let n = component.len();
    let restart = config.restart_probability;
    let walk = 1.0 - restart;
    let mut rank = vec![0.0; n];
    rank[root_idx] = 1.0;
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;
        next.iter_mut().for_each(|v| *v = 0.0);
        next[root_idx] = restart;

        for (i, adj) in neighbors.iter().enumerate() {
            if adj.is_empty() {
                next[root_idx] += walk * rank[i];
                continue;
            }
            let share = walk * rank[i] / adj.len() as f64;
            for &j in adj {
                next[j] += share;
            }
        }

        let delta: f64 = rank.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut rank, &mut next);
        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    tracing::trace!(component = n, iterations, converged, "personalized pagerank computed");

    PageRankResult {
        scores: component.into_iter().cloned().zip(rank).collect(),
        iterations,
        converged,
    }
}

/// Nodes reachable from `root`, ascending
fn connected_component<'a, T>(graph: &'a SocialGraph<T>, root: &'a T) -> Vec<&'a T>
where
    T: Eq + Hash + Ord + Clone,
{
    let mut seen: BTreeSet<&T> = BTreeSet::new();
    let mut queue = VecDeque::from([root]);
    seen.insert(root);
    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node).into_iter().flatten() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.into_iter().collect()
}
