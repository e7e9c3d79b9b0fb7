//! Service Layer

pub mod shared_graph;

pub use shared_graph::SharedSocialGraph;
