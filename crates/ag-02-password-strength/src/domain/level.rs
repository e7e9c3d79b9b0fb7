//! Ordered strength levels with their display data

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five ordered strength levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

/// Display data attached to each level
struct LevelInfo {
    label: &'static str,
    /// Inclusive lower entropy bound in bits
    min_entropy_bits: f64,
    /// Indicator colour for the registration form
    color: &'static str,
}

/// Indexed by `StrengthLevel as usize`; bounds ascend strictly
const LEVEL_TABLE: [LevelInfo; 5] = [
    LevelInfo {
        label: "Weak",
        min_entropy_bits: 0.0,
        color: "#d32f2f",
    },
    LevelInfo {
        label: "Fair",
        min_entropy_bits: 28.0,
        color: "#f57c00",
    },
    LevelInfo {
        label: "Good",
        min_entropy_bits: 36.0,
        color: "#fbc02d",
    },
    LevelInfo {
        label: "Strong",
        min_entropy_bits: 60.0,
        color: "#689f38",
    },
    LevelInfo {
        label: "Excellent",
        min_entropy_bits: 80.0,
        color: "#1b5e20",
    },
];

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
        StrengthLevel::Excellent,
    ];

    const fn info(self) -> &'static LevelInfo {
        &LEVEL_TABLE[self as usize]
    }

    pub const fn label(self) -> &'static str {
        self.info().label
    }

    pub const fn min_entropy_bits(self) -> f64 {
        self.info().min_entropy_bits
    }

    pub const fn color(self) -> &'static str {
        self.info().color
    }

    /// Numeric score 0 (Weak) to 4 (Excellent)
    pub const fn score(self) -> u8 {
        self as u8
    }

    /// Highest level whose lower bound does not exceed `bits`
    pub fn from_entropy(bits: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| bits >= level.min_entropy_bits())
            .unwrap_or(StrengthLevel::Weak)
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
