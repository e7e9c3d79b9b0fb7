//! # AG-02 Password Strength
//!
//! Information-theoretic password scoring for registration and password
//! change forms.
//!
//! ## Algorithm
//!
//! 1. Partition characters into classes (lowercase, uppercase, digit,
//!    symbol, non-ASCII) and sum their sizes into an alphabet size `A`
//! 2. Raw entropy `H = length * log2(A)`
//! 3. Subtract a fixed penalty for each weak pattern kind present
//!    (repeated characters, sequential runs, common words, keyboard walks),
//!    flooring at zero
//! 4. Map the result onto five ordered levels
//!
//! The estimator is total and deterministic: every string, including the
//! empty one, yields a result.
//!
//! ```ignore
//! use ag_02_password_strength::{estimate_password_strength, StrengthLevel};
//!
//! let result = estimate_password_strength("Tr0ub4dor&3");
//! assert_eq!(result.level, StrengthLevel::Strong);
//! ```

pub mod domain;

pub use domain::analyzer::estimate_password_strength;
pub use domain::{
    CharacterClass, CharacterProfile, PasswordAnalyzer, PasswordPolicy, PasswordStrength,
    StrengthLevel, WeakPattern,
};
