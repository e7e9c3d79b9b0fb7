//! Inbound Ports (Driving Ports)

use crate::error::GraphError;

/// Friendship API used by the "accept request" and "people you may know"
/// flows (Driving Port)
pub trait FriendGraph<T>: Send + Sync {
    /// Record an accepted friendship; `Ok(false)` if it already existed
    fn connect(&self, a: T, b: T) -> Result<bool, GraphError>;

    /// Remove a friendship; returns whether it existed
    fn disconnect(&self, a: &T, b: &T) -> bool;

    /// Ranked recommendations, best first
    fn recommend(&self, node: &T, limit: usize) -> Vec<T>;
}
