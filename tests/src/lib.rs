//! # Agora Core Test Suite
//!
//! Cross-component scenarios that no single crate can test alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── registration_flow.rs   # filter registry + password policy at sign-up
//!     ├── monitoring_flow.rs     # latency monitor history -> load forecaster
//!     ├── throttling_flow.rs     # concurrent clients against the rate limiter
//!     ├── social_flow.rs         # graph rebuild, concurrent accepts, recommendations
//!     └── feed_flow.rs           # ranking functions ordering a feed
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p agora-tests
//! cargo test -p agora-tests integration::monitoring_flow
//! cargo bench -p agora-tests
//! ```

pub mod integration;
