//! Domain Layer - Pure password analysis
//!
//! RULES:
//! - Deterministic: same password, same result
//! - Total: every input string produces a result, never an error

pub mod analyzer;
pub mod character_classes;
pub mod level;
pub mod patterns;

pub use analyzer::{PasswordAnalyzer, PasswordPolicy, PasswordStrength};
pub use character_classes::{CharacterClass, CharacterProfile};
pub use level::StrengthLevel;
pub use patterns::{detect_patterns, WeakPattern};
