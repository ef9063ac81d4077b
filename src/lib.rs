//! Homoglyph-free password and passphrase generation.
//!
//! Passwords are short, fixed length, and always contain at least one
//! character of every configured category (lowercase, uppercase and digits
//! by default). Characters that are easy to misread are left out of every
//! alphabet.
//!
//! ```
//! use passgen::{PasswordGenerator, rng};
//!
//! let generator = PasswordGenerator::default();
//! let password = generator.generate(&mut rng::os());
//! assert_eq!(password.len(), 8);
//!
//! let estimate = generator.estimate();
//! println!("More than {estimate} combinations ~ {:.1} bits of entropy.", estimate.bits());
//! ```

pub mod cli;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod phrase;
pub mod rng;

pub use entropy::Estimate;
pub use error::{ConfigError, Error, Result};
pub use pass::{Category, Configuration, Password, PasswordGenerator};
pub use phrase::{Passphrase, PassphraseGenerator, WordList};
