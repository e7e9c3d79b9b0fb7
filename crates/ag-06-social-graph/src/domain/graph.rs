//! Undirected, unweighted adjacency storage

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::error::GraphError;

/// Friendship graph keyed by user id
///
/// Every edge is stored in both directions. Nodes stay in the graph after
/// their last edge is removed.
#[derive(Clone, Debug)]
pub struct SocialGraph<T> {
    adjacency: HashMap<T, BTreeSet<T>>,
    edges: usize,
}

impl<T> Default for SocialGraph<T> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edges: 0,
        }
    }
}

impl<T> SocialGraph<T>
where
    T: Eq + Hash + Ord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted relationships; self-loops are skipped
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        let mut skipped = 0usize;
        for (a, b) in edges {
            if graph.add_edge(a, b).is_err() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "Skipped self-loop edges while rebuilding graph");
        }
        graph
    }

    /// Insert `a <-> b`; returns `false` if the edge already existed
    pub fn add_edge(&mut self, a: T, b: T) -> Result<bool, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop);
        }
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.edges += 1;
        }
        Ok(inserted)
    }

    /// Remove `a <-> b`; returns whether it existed
    pub fn remove_edge(&mut self, a: &T, b: &T) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .map(|set| set.remove(b))
            .unwrap_or(false);
        if removed {
            if let Some(set) = self.adjacency.get_mut(b) {
                set.remove(a);
            }
            self.edges -= 1;
        }
        removed
    }

    /// Register a node with no edges; returns `false` if already present
    pub fn add_node(&mut self, node: T) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn has_edge(&self, a: &T, b: &T) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    pub fn neighbors(&self, node: &T) -> Option<&BTreeSet<T>> {
        self.adjacency.get(node)
    }

    pub fn degree(&self, node: &T) -> usize {
        self.adjacency.get(node).map_or(0, BTreeSet::len)
    }

    /// Neighbors shared by `a` and `b`, ascending
    pub fn common_neighbors(&self, a: &T, b: &T) -> Vec<&T> {
        match (self.adjacency.get(a), self.adjacency.get(b)) {
            (Some(na), Some(nb)) => na.intersection(nb).collect(),
            _ => Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Each edge once, as `(smaller, larger)`, sorted
    pub fn edges(&self) -> Vec<(T, T)> {
        let mut edges: Vec<(T, T)> = self
            .adjacency
            .iter()
            .flat_map(|(a, set)| {
                set.iter()
                    .filter(move |b| a < *b)
                    .map(move |b| (a.clone(), b.clone()))
            })
            .collect();
        edges.sort();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric_and_idempotent() {
        let mut graph = SocialGraph::new();
        assert_eq!(graph.add_edge(1, 2), Ok(true));
        assert_eq!(graph.add_edge(2, 1), Ok(false));
        assert_eq!(graph.add_edge(1, 2), Ok(false));
        assert!(graph.has_edge(&2, &1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&1), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = SocialGraph::new();
        assert_eq!(graph.add_edge("a", "a"), Err(GraphError::SelfLoop));
        assert_eq!(graph.node_count(), 0, "rejected edge must not register the node");
    }

    #[test]
    fn test_remove_edge_keeps_nodes() {
        let mut graph = SocialGraph::new();
        graph.add_edge(1, 2).unwrap();
        assert!(graph.remove_edge(&2, &1));
        assert!(!graph.remove_edge(&1, &2));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node(&1));
        assert_eq!(graph.degree(&1), 0);
    }

    #[test]
    fn test_add_node() {
        let mut graph: SocialGraph<u32> = SocialGraph::new();
        assert!(graph.add_node(7));
        assert!(!graph.add_node(7));
        assert_eq!(graph.degree(&7), 0);
        assert_eq!(graph.degree(&8), 0);
    }

    #[test]
    fn test_common_neighbors_sorted() {
        let graph = SocialGraph::from_edges([(1, 5), (1, 3), (2, 5), (2, 3), (2, 4)]);
        assert_eq!(graph.common_neighbors(&1, &2), vec![&3, &5]);
        assert!(graph.common_neighbors(&1, &99).is_empty());
    }

    #[test]
    fn test_from_edges_skips_self_loops() {
        let graph = SocialGraph::from_edges([(1, 2), (3, 3), (2, 1)]);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_node(&3));
        assert_eq!(graph.edges(), vec![(1, 2)]);
    }
}
