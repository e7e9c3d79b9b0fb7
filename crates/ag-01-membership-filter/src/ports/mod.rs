//! Ports Layer
//!
//! Driving port through which registration and lookup flows query a filter.

pub mod inbound;

pub use inbound::MembershipFilterApi;
