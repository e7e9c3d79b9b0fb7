//! Domain Layer
//!
//! Graph storage and the three recommendation signals. Neighbor sets are
//! ordered so every traversal, and therefore every floating-point sum, runs
//! in the same order on every call.

pub mod config;
pub mod graph;
pub mod pagerank;
pub mod recommender;
pub mod similarity;

pub use config::RecommenderConfig;
pub use graph::SocialGraph;
pub use pagerank::{personalized_pagerank, PageRankResult};
pub use recommender::{recommend_friends_scored, Recommendation};
pub use similarity::{adamic_adar, jaccard_similarity};
