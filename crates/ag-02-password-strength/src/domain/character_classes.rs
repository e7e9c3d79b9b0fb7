//! Character class detection and alphabet size estimation

use serde::{Deserialize, Serialize};

/// Character classes contributing to the alphabet size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    NonAscii,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
        CharacterClass::NonAscii,
    ];

    /// Number of symbols an attacker must consider for this class
    pub const fn alphabet_size(self) -> u32 {
        match self {
            CharacterClass::Lowercase => 26,
            CharacterClass::Uppercase => 26,
            CharacterClass::Digit => 10,
            // Printable ASCII punctuation plus space
            CharacterClass::Symbol => 33,
            CharacterClass::NonAscii => 100,
        }
    }

    /// Improvement hint when the class is absent
    pub const fn missing_hint(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Add lowercase letters",
            CharacterClass::Uppercase => "Add uppercase letters",
            CharacterClass::Digit => "Add digits",
            CharacterClass::Symbol => "Add symbols such as ! or #",
            CharacterClass::NonAscii => "",
        }
    }

    pub fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if c.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if c.is_ascii_digit() {
            CharacterClass::Digit
        } else if c.is_ascii() {
            CharacterClass::Symbol
        } else {
            CharacterClass::NonAscii
        }
    }
}

/// Which classes a password uses, and its length in characters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterProfile {
    present: [bool; 5],
    length: usize,
}

impl CharacterProfile {
    pub fn of(password: &str) -> Self {
        let mut profile = Self::default();
        for c in password.chars() {
            profile.present[CharacterClass::of(c) as usize] = true;
            profile.length += 1;
        }
        profile
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.present[class as usize]
    }

    /// Length in Unicode scalar values
    pub fn length(&self) -> usize {
        self.length
    }

    /// Alphabet size A: sum of the sizes of every class present
    pub fn alphabet_size(&self) -> u32 {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.contains(**class))
            .map(|class| class.alphabet_size())
            .sum()
    }

    /// Shannon entropy estimate H = length * log2(A)
    pub fn raw_entropy_bits(&self) -> f64 {
        let alphabet = self.alphabet_size();
        if self.length == 0 || alphabet == 0 {
            return 0.0;
        }
        self.length as f64 * (alphabet as f64).log2()
    }

    /// ASCII classes the password does not use
    pub fn missing_ascii_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| *class != CharacterClass::NonAscii && !self.contains(*class))
    }
}
