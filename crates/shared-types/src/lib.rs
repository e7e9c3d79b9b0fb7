//! # Shared Types Crate
//!
//! Primitives used by more than one Agora component.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Timestamp` is milliseconds since the Unix
//!   epoch everywhere in the workspace.
//! - **Injected Time**: components never read the wall clock directly; they
//!   hold a `TimeSource` so tests can drive time deterministically.

pub mod time;

pub use time::{ManualTimeSource, SystemTimeSource, TimeSource, Timestamp, MS_PER_HOUR};
