//! Character categories for password generation.
//!
//! Look-alike characters are left out of every default alphabet so a password
//! can be read back and typed without guessing between `1`, `l` and `I`.

use crate::error::ConfigError;

const LOWERCASE: &str = "abcdefghjkmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "23456789";

/// A named, ordered alphabet of distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    chars: Vec<char>,
}

impl Category {
    /// Build a category, rejecting empty alphabets and repeated characters.
    pub fn new(name: impl Into<String>, alphabet: &str) -> Result<Self, ConfigError> {
        let name = name.into();
        let chars: Vec<char> = alphabet.chars().collect();

        if chars.is_empty() {
            return Err(ConfigError::EmptyCategory { name });
        }
        for (i, &ch) in chars.iter().enumerate() {
            if chars[..i].contains(&ch) {
                return Err(ConfigError::DuplicateCharacter { name, ch });
            }
        }

        Ok(Self { name, chars })
    }

    pub fn lowercase() -> Self {
        Self::builtin("lowercase", LOWERCASE)
    }

    pub fn uppercase() -> Self {
        Self::builtin("uppercase", UPPERCASE)
    }

    pub fn digits() -> Self {
        Self::builtin("digits", DIGITS)
    }

    // Built-in alphabets are known to be non-empty and duplicate free.
    fn builtin(name: &str, alphabet: &str) -> Self {
        Self {
            name: name.to_string(),
            chars: alphabet.chars().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Alphabet size.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// Concatenate category alphabets in category order.
pub fn combined(categories: &[Category]) -> Vec<char> {
    categories
        .iter()
        .flat_map(|c| c.chars().iter().copied())
        .collect()
}

/// Total alphabet size across all categories (for entropy calculation).
pub fn size(categories: &[Category]) -> usize {
    categories.iter().map(Category::len).sum()
}
