//! Error types shared by the password and passphrase generators.

use thiserror::Error;

/// A generator configuration that cannot produce valid output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no character categories configured")]
    NoCategories,

    #[error("password length must be at least 1")]
    ZeroLength,

    #[error("category '{name}' is empty")]
    EmptyCategory { name: String },

    #[error("category '{name}' contains '{ch}' more than once")]
    DuplicateCharacter { name: String, ch: char },

    #[error("character '{ch}' appears in both '{first}' and '{second}'")]
    OverlappingCategories {
        ch: char,
        first: String,
        second: String,
    },

    #[error("too many categories for password length: {categories} categories, length {length}")]
    TooManyCategories { categories: usize, length: usize },

    #[error("word list is empty")]
    EmptyWordList,
}

/// Top-level error for library operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
