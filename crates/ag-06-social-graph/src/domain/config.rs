//! Recommender configuration

use serde::{Deserialize, Serialize};

use crate::error::{invalid, GraphError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub jaccard_weight: f64,
    pub pagerank_weight: f64,
    pub adamic_adar_weight: f64,
    /// Probability the random walk jumps back to the querying user
    pub restart_probability: f64,
    pub max_iterations: usize,
    /// L1 change below which personalized PageRank stops early
    pub tolerance: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            jaccard_weight: 0.4,
            pagerank_weight: 0.3,
            adamic_adar_weight: 0.3,
            restart_probability: 0.15,
            max_iterations: 50,
            tolerance: 1e-8,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        let weights = [
            ("jaccard_weight", self.jaccard_weight),
            ("pagerank_weight", self.pagerank_weight),
            ("adamic_adar_weight", self.adamic_adar_weight),
        ];
        for (field, w) in weights {
            if !(w.is_finite() && w >= 0.0) {
                return Err(invalid(field, format!("must be finite and >= 0, got {w}")));
            }
        }
        if weights.iter().all(|(_, w)| *w == 0.0) {
            return Err(invalid("jaccard_weight", "at least one signal weight must be positive"));
        }
        if !(self.restart_probability > 0.0 && self.restart_probability < 1.0) {
            return Err(invalid(
                "restart_probability",
                format!("must be in (0, 1), got {}", self.restart_probability),
            ));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be at least 1"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid("tolerance", "must be finite and > 0"));
        }
        Ok(())
    }

    pub fn with_weights(mut self, jaccard: f64, pagerank: f64, adamic_adar: f64) -> Self {
        self.jaccard_weight = jaccard;
        self.pagerank_weight = pagerank;
        self.adamic_adar_weight = adamic_adar;
        self
    }

    pub fn with_restart_probability(mut self, restart: f64) -> Self {
        self.restart_probability = restart;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
