//! Passphrase generation from a word list.
//!
//! A passphrase is a fixed number of dictionary words picked uniformly and
//! independently, joined by single spaces.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroize;

use crate::entropy::Estimate;
use crate::error::{ConfigError, Result};
use crate::rng::RandomSource;

pub const DEFAULT_WORD_COUNT: usize = 4;
pub const DEFAULT_DICTIONARY: &str = "goodwords.txt";

/// Non-empty list of distinct words, each free of whitespace.
///
/// Entries are split on whitespace, so `"ice cream"` contributes two words.
/// Repeats are dropped keeping first occurrence, which keeps
/// `words ^ count` an exact passphrase count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> std::result::Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for entry in words {
            for word in entry.as_ref().split_whitespace() {
                if seen.insert(word.to_string()) {
                    list.push(word.to_string());
                }
            }
        }

        if list.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words: list })
    }

    /// Parse newline-separated words.
    pub fn parse(text: &str) -> std::result::Result<Self, ConfigError> {
        Self::new(text.lines())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let list = Self::parse(&text)?;
        info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A generated passphrase. The buffer is wiped on drop.
pub struct Passphrase(String);

impl Passphrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(***)")
    }
}

impl Drop for Passphrase {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Debug, Clone)]
pub struct PassphraseGenerator {
    words: WordList,
    count: usize,
}

impl PassphraseGenerator {
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            count: DEFAULT_WORD_COUNT,
        }
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Passphrase {
        let words = self.words.words();
        let capacity = words.iter().map(String::len).max().unwrap_or(0) * self.count + self.count;

        let mut phrase = String::with_capacity(capacity);
        for i in 0..self.count {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(&words[rng.index(words.len())]);
        }

        debug!(words = self.count, "passphrase generated");
        Passphrase(phrase)
    }

    /// Exact number of passphrases: `words ^ count`.
    pub fn combinations(&self) -> Estimate {
        Estimate::one().times_pow(self.words.len(), self.count)
    }
}
