//! Weak pattern detection
//!
//! Each pattern kind subtracts a fixed penalty once, however many times it
//! occurs in the password.

use serde::{Deserialize, Serialize};

/// Minimum run length for repeated and sequential detection
pub const MIN_RUN: usize = 3;

/// Minimum walk length along a keyboard row
pub const MIN_KEYBOARD_WALK: usize = 4;

/// Frequently leaked passwords and password fragments, lowercase
pub const COMMON_WORDS: &[&str] = &[
    "password", "passw0rd", "qwerty", "letmein", "welcome", "admin", "login", "dragon",
    "monkey", "master", "sunshine", "princess", "football", "baseball", "iloveyou",
    "trustno1", "shadow", "superman", "batman", "secret", "freedom", "whatever",
    "starwars", "computer", "abc123", "111111", "123123", "654321",
];

/// Letter rows of a US keyboard
const KEYBOARD_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Weak patterns that reduce effective entropy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeakPattern {
    /// Same character three or more times in a row ("aaa")
    Repeated,
    /// Ascending or descending run ("abc", "321")
    Sequential,
    /// Contains a common password or word
    Dictionary,
    /// Walk along a keyboard row ("asdf")
    Keyboard,
}

impl WeakPattern {
    pub const ALL: [WeakPattern; 4] = [
        WeakPattern::Repeated,
        WeakPattern::Sequential,
        WeakPattern::Dictionary,
        WeakPattern::Keyboard,
    ];

    /// Bits subtracted from the raw entropy when the pattern is present
    pub const fn penalty_bits(self) -> f64 {
        match self {
            WeakPattern::Repeated => 10.0,
            WeakPattern::Sequential => 10.0,
            WeakPattern::Dictionary => 20.0,
            WeakPattern::Keyboard => 15.0,
        }
    }

    pub const fn feedback(self) -> &'static str {
        match self {
            WeakPattern::Repeated => "Avoid repeating the same character",
            WeakPattern::Sequential => "Avoid sequences like abc or 123",
            WeakPattern::Dictionary => "Avoid common words and leaked passwords",
            WeakPattern::Keyboard => "Avoid keyboard walks like qwerty or asdf",
        }
    }

    fn is_present(self, lowered: &[char]) -> bool {
        match self {
            WeakPattern::Repeated => has_repeated_run(lowered),
            WeakPattern::Sequential => has_sequential_run(lowered),
            WeakPattern::Dictionary => has_common_word(lowered),
            WeakPattern::Keyboard => has_keyboard_walk(lowered),
        }
    }
}

/// All pattern kinds present in `password`, in declaration order
pub fn detect_patterns(password: &str) -> Vec<WeakPattern> {
    let lowered: Vec<char> = password.chars().flat_map(char::to_lowercase).collect();
    WeakPattern::ALL
        .into_iter()
        .filter(|pattern| pattern.is_present(&lowered))
        .collect()
}

fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(MIN_RUN).any(|w| w.iter().all(|c| *c == w[0]))
}

fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(MIN_RUN).any(|w| {
        if !w.iter().all(char::is_ascii_alphanumeric) {
            return false;
        }
        let steps: Vec<i32> = w.windows(2).map(|p| p[1] as i32 - p[0] as i32).collect();
        steps.iter().all(|s| *s == 1) || steps.iter().all(|s| *s == -1)
    })
}

/// Undo common character substitutions ("p@ssw0rd" -> "password")
fn unleet(c: char) -> char {
    match c {
        '0' => 'o',
        '1' | '!' => 'i',
        '3' => 'e',
        '4' | '@' => 'a',
        '5' | '$' => 's',
        '7' => 't',
        other => other,
    }
}

fn has_common_word(chars: &[char]) -> bool {
    let plain: String = chars.iter().collect();
    let unleeted: String = chars.iter().map(|c| unleet(*c)).collect();
    COMMON_WORDS
        .iter()
        .any(|word| plain.contains(word) || unleeted.contains(word))
}

fn has_keyboard_walk(chars: &[char]) -> bool {
    if chars.len() < MIN_KEYBOARD_WALK {
        return false;
    }
    let text: String = chars.iter().collect();
    KEYBOARD_ROWS.iter().any(|row| {
        let reversed: String = row.chars().rev().collect();
        [row.to_string(), reversed].iter().any(|line| {
            let line: Vec<char> = line.chars().collect();
            line.windows(MIN_KEYBOARD_WALK).any(|walk| {
                let walk: String = walk.iter().collect();
                text.contains(&walk)
            })
        })
    })
}
