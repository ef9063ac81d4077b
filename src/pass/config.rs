//! Generator configuration.

use tracing::debug;

use super::charset::Category;
use crate::error::ConfigError;

pub const DEFAULT_LENGTH: usize = 8;

/// Ordered categories plus a target length. Only obtainable through
/// [`Configuration::new`] or [`Default`], so every instance is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    categories: Vec<Category>,
    length: usize,
}

impl Configuration {
    pub fn new(categories: Vec<Category>, length: usize) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if categories.len() > length {
            return Err(ConfigError::TooManyCategories {
                categories: categories.len(),
                length,
            });
        }

        // Categories are non-empty by construction; only disjointness is left.
        for (i, category) in categories.iter().enumerate() {
            for earlier in &categories[..i] {
                if let Some(&ch) = category.chars().iter().find(|&&ch| earlier.contains(ch)) {
                    return Err(ConfigError::OverlappingCategories {
                        ch,
                        first: earlier.name().to_string(),
                        second: category.name().to_string(),
                    });
                }
            }
        }

        debug!(
            categories = categories.len(),
            length, "password configuration accepted"
        );
        Ok(Self { categories, length })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::lowercase(),
                Category::uppercase(),
                Category::digits(),
            ],
            length: DEFAULT_LENGTH,
        }
    }
}
