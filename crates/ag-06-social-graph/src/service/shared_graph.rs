//! Concurrent social graph
//!
//! Edge insertion takes the write lock once per pair, so both directions
//! appear together. Recommendations run under the read lock and may
//! interleave with writers between calls.

use std::hash::Hash;

use agora_telemetry::{components, log_component_event};
use parking_lot::RwLock;

use crate::domain::{recommend_friends_scored, Recommendation, RecommenderConfig, SocialGraph};
use crate::error::GraphError;
use crate::ports::FriendGraph;

pub struct SharedSocialGraph<T> {
    graph: RwLock<SocialGraph<T>>,
    config: RecommenderConfig,
}

impl<T> SharedSocialGraph<T>
where
    T: Eq + Hash + Ord + Clone + Send + Sync,
{
    pub fn new(config: RecommenderConfig) -> Result<Self, GraphError> {
        Self::from_graph(SocialGraph::new(), config)
    }

    /// Wrap a graph rebuilt from persisted relationships
    pub fn from_graph(graph: SocialGraph<T>, config: RecommenderConfig) -> Result<Self, GraphError> {
        config.validate()?;
        log_component_event!(
            info,
            components::SOCIAL_GRAPH,
            "Social graph loaded",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );
        Ok(Self {
            graph: RwLock::new(graph),
            config,
        })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn add_node(&self, node: T) -> bool {
        self.graph.write().add_node(node)
    }

    pub fn recommend_scored(&self, node: &T, limit: usize) -> Vec<Recommendation<T>> {
        let graph = self.graph.read();
        recommend_friends_scored(&graph, node, limit, &self.config)
    }

    pub fn degree(&self, node: &T) -> usize {
        self.graph.read().degree(node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.read().node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.read().edge_count()
    }

    /// Owned copy for long-running offline analysis
    pub fn snapshot(&self) -> SocialGraph<T> {
        self.graph.read().clone()
    }
}

impl<T> FriendGraph<T> for SharedSocialGraph<T>
where
    T: Eq + Hash + Ord + Clone + Send + Sync,
{
    fn connect(&self, a: T, b: T) -> Result<bool, GraphError> {
        self.graph.write().add_edge(a, b)
    }

    fn disconnect(&self, a: &T, b: &T) -> bool {
        self.graph.write().remove_edge(a, b)
    }

    fn recommend(&self, node: &T, limit: usize) -> Vec<T> {
        self.recommend_scored(node, limit)
            .into_iter()
            .map(|rec| rec.node)
            .collect()
    }
}
