//! Service Layer
//!
//! Thread-safe wrappers that own synchronization and instrumentation around
//! the domain filter.

pub mod registry;
pub mod shared_filter;

pub use registry::FilterRegistry;
pub use shared_filter::SharedMembershipFilter;
