//! Password analysis: entropy, penalties, level and feedback

use agora_telemetry::{components, log_component_event};
use serde::{Deserialize, Serialize};

use super::character_classes::CharacterProfile;
use super::level::StrengthLevel;
use super::patterns::{detect_patterns, WeakPattern};

/// Result of analyzing one password
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Penalized entropy in bits, never negative
    pub entropy_bits: f64,
    pub level: StrengthLevel,
    /// Human-readable improvement hints
    pub feedback: Vec<String>,
    /// Pattern kinds that triggered a penalty
    pub detected_patterns: Vec<WeakPattern>,
}

/// Acceptance rules applied on top of the raw estimate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Below this length a length hint is emitted
    pub recommended_length: usize,
    /// Lowest level `meets_policy` accepts
    pub minimum_level: StrengthLevel,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            recommended_length: 12,
            minimum_level: StrengthLevel::Good,
        }
    }
}

impl PasswordPolicy {
    pub fn with_recommended_length(mut self, length: usize) -> Self {
        self.recommended_length = length;
        self
    }

    pub fn with_minimum_level(mut self, level: StrengthLevel) -> Self {
        self.minimum_level = level;
        self
    }
}

/// Password strength estimator
#[derive(Clone, Debug, Default)]
pub struct PasswordAnalyzer {
    policy: PasswordPolicy,
}

impl PasswordAnalyzer {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Estimate the strength of `password`
    ///
    /// H = length * log2(A), minus a fixed penalty per detected pattern kind,
    /// floored at zero. The empty string is Weak with zero entropy.
    pub fn analyze(&self, password: &str) -> PasswordStrength {
        let profile = CharacterProfile::of(password);
        let patterns = detect_patterns(password);

        let penalty: f64 = patterns.iter().map(|p| p.penalty_bits()).sum();
        let entropy_bits = (profile.raw_entropy_bits() - penalty).max(0.0);
        let level = StrengthLevel::from_entropy(entropy_bits);

        let mut feedback = Vec::new();
        if profile.length() == 0 {
            feedback.push("Password is empty".to_string());
        }
        if profile.length() < self.policy.recommended_length {
            feedback.push(format!(
                "Use at least {} characters",
                self.policy.recommended_length
            ));
        }
        feedback.extend(
            profile
                .missing_ascii_classes()
                .map(|class| class.missing_hint().to_string()),
        );
        feedback.extend(patterns.iter().map(|p| p.feedback().to_string()));

        log_component_event!(
            trace,
            components::PASSWORD_STRENGTH,
            "Password analyzed",
            length = profile.length(),
            alphabet = profile.alphabet_size(),
            penalty,
            entropy_bits,
            level = %level
        );

        PasswordStrength {
            entropy_bits,
            level,
            feedback,
            detected_patterns: patterns,
        }
    }

    /// Whether `password` reaches the policy's minimum level
    pub fn meets_policy(&self, password: &str) -> bool {
        self.analyze(password).level >= self.policy.minimum_level
    }
}

/// Analyze with the default policy
pub fn estimate_password_strength(password: &str) -> PasswordStrength {
    PasswordAnalyzer::default().analyze(password)
}
