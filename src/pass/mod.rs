//! Password generation with category coverage.

pub mod charset;
pub mod config;
mod estimate;
mod generate;

pub use charset::Category;
pub use config::Configuration;
pub use generate::{Password, PasswordGenerator};
