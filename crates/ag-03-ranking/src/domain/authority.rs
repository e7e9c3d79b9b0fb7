//! User authority via PageRank over the interaction graph
//!
//! An interaction `(from, to)` means `from` engaged with content by `to`,
//! so authority flows toward users that others engage with. Repeated
//! interactions between the same pair add weight. Self-interactions are
//! ignored for scoring but still register the user.
//!
//! Users with no outgoing interactions (dangling nodes) spread their mass
//! uniformly, so scores always sum to 1.

use std::collections::{BTreeMap, BTreeSet};

use agora_telemetry::{components, log_component_event};
use serde::{Deserialize, Serialize};

use crate::error::RankingError;

/// Power-iteration parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// Probability of following an interaction rather than teleporting
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 change between iterations below which the scores are final
    pub tolerance: f64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl AuthorityConfig {
    pub fn validate(&self) -> Result<(), RankingError> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(RankingError::InvalidConfiguration(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankingError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RankingError::InvalidConfiguration(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Scores plus convergence diagnostics
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorityResult<T: Ord> {
    pub scores: BTreeMap<T, f64>,
    pub iterations: usize,
    pub converged: bool,
}

impl<T: Ord + Clone> AuthorityResult<T> {
    pub fn score(&self, user: &T) -> f64 {
        self.scores.get(user).copied().unwrap_or(0.0)
    }

    /// Users ordered by descending score, ties by ascending id
    pub fn ranked(&self) -> Vec<(T, f64)> {
        let mut ranked: Vec<(T, f64)> = self
            .scores
            .iter()
            .map(|(user, score)| (user.clone(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

/// Run PageRank over `interactions`
///
/// Iteration stops at `max_iterations` even if the tolerance is not met;
/// `converged` reports which happened. An empty input yields no scores.
pub fn authority_scores<T>(
    interactions: &[(T, T)],
    config: &AuthorityConfig,
) -> Result<AuthorityResult<T>, RankingError>
where
    T: Ord + Clone,
{
    config.validate()?;

    let users: BTreeSet<&T> = interactions.iter().flat_map(|(a, b)| [a, b]).collect();
    if users.is_empty() {
        return Ok(AuthorityResult {
            scores: BTreeMap::new(),
            iterations: 0,
            converged: true,
        });
    }
    let users: Vec<&T> = users.into_iter().collect();
    let index: BTreeMap<&T, usize> = users.iter().enumerate().map(|(i, u)| (*u, i)).collect();
    let n = users.len();

    // Aggregate weights per (from, to) pair so duplicates count once per occurrence
    let mut weights: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (from, to) in interactions {
        let (from, to) = (index[from], index[to]);
        if from != to {
            *weights.entry((from, to)).or_insert(0.0) += 1.0;
        }
    }
    let mut out_weight = vec![0.0; n];
    let mut incoming: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for (&(from, to), &w) in &weights {
        out_weight[from] += w;
        incoming[to].push((from, w));
    }

    let uniform = 1.0 / n as f64;
    let d = config.damping;
    let mut rank = vec![uniform; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling: f64 = (0..n)
            .filter(|&i| out_weight[i] == 0.0)
            .map(|i| rank[i])
            .sum();
        let base = (1.0 - d) * uniform + d * dangling * uniform;

        for (to, sources) in incoming.iter().enumerate() {
            let inflow: f64 = sources
                .iter()
                .map(|&(from, w)| rank[from] * w / out_weight[from])
                .sum();
            next[to] = base + d * inflow;
        }

        let delta: f64 = rank.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut rank, &mut next);
        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    log_component_event!(
        debug,
        components::RANKING,
        "Authority scores computed",
        users = n,
        interactions = interactions.len(),
        iterations,
        converged
    );

    let scores = users
        .into_iter()
        .cloned()
        .zip(rank)
        .collect::<BTreeMap<T, f64>>();

    Ok(AuthorityResult {
        scores,
        iterations,
        converged,
    })
}
