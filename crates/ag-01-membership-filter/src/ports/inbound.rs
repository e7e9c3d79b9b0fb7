//! Inbound Ports (Driving Ports)

/// Approximate membership API (Driving Port)
///
/// Implementations must be safe to call from many request threads at once
/// and must never lose an insert: a lost update would reintroduce false
/// negatives.
pub trait MembershipFilterApi: Send + Sync {
    /// Record that `key` has been seen
    fn add(&self, key: &str);

    /// `false` means definitely never added; `true` means "verify against
    /// the source of truth"
    fn might_contain(&self, key: &str) -> bool;

    /// Number of inserts performed
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
