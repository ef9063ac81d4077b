//! Password generation.

use std::fmt;

use tracing::trace;
use zeroize::Zeroize;

use super::charset;
use super::config::Configuration;
use crate::rng::{self, RandomSource};

/// A generated password. The buffer is wiped on drop.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Builds passwords that contain at least one character of every category.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: Configuration,
    alphabet: Vec<char>,
}

impl PasswordGenerator {
    pub fn new(config: Configuration) -> Self {
        let alphabet = charset::combined(config.categories());
        Self { config, alphabet }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Combined alphabet in category order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generate one password.
    ///
    /// Each category gets one distinct forced position, drawn by shuffling the
    /// position indices. Every other position draws from the combined
    /// alphabet, independently and uniformly.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Password {
        let length = self.config.length();
        let mut makeup: Vec<&[char]> = vec![self.alphabet.as_slice(); length];

        let mut forced = self.forced_positions(rng);
        for (&pos, category) in forced.iter().zip(self.config.categories()) {
            makeup[pos] = category.chars();
        }
        forced.zeroize();

        // Worst case four bytes per char, so the buffer never reallocates
        // and leaves no stray copy behind.
        let mut password = String::with_capacity(length * 4);
        for chars in &makeup {
            password.push(chars[rng.index(chars.len())]);
        }

        trace!(length, "password generated");
        Password(password)
    }

    /// One distinct position per category, in category order.
    pub(crate) fn forced_positions<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.config.length()).collect();
        rng::shuffle(&mut positions, rng);
        positions.truncate(self.config.categories().len());
        positions
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
