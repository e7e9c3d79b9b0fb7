//! # Social Graph Recommender
//!
//! Undirected friendship graph with "people you may know" recommendations.
//!
//! ## Signals
//!
//! | Signal | Default weight | Captures |
//! |--------|----------------|----------|
//! | Jaccard similarity | 0.4 | Overlap of friend circles |
//! | Personalized PageRank | 0.3 | Proximity by random walk with restart |
//! | Adamic-Adar | 0.3 | Mutual friends, discounting hubs |
//!
//! Candidates are friends-of-friends that are not already friends; ties are
//! ordered by ascending node id.
//!
//! ## Example
//!
//! ```rust
//! use ag_06_social_graph::SocialGraph;
//!
//! let mut graph = SocialGraph::new();
//! graph.add_edge("alice", "bob").unwrap();
//! graph.add_edge("bob", "carol").unwrap();
//!
//! assert_eq!(graph.recommend_friends(&"alice", 5), vec!["carol"]);
//! assert!(graph.add_edge("dave", "dave").is_err());
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{
    adamic_adar, jaccard_similarity, personalized_pagerank, recommend_friends_scored,
    PageRankResult, Recommendation, RecommenderConfig, SocialGraph,
};
pub use error::GraphError;
pub use ports::FriendGraph;
pub use service::SharedSocialGraph;
