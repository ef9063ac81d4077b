//! Command-line front ends for the `passgen` and `passphrase` binaries.

mod args;
mod output;
pub mod prompts;

use std::io::Write;

use tracing::debug;

pub use args::{PassgenArgs, PassphraseArgs};
pub use output::{passphrase_entropy_line, password_entropy_line, write_secret};

use crate::entropy;
use crate::error::Result;
use crate::pass::PasswordGenerator;
use crate::phrase::{PassphraseGenerator, WordList};
use crate::rng::{self, RandomSource};

/// Print one password, or the entropy estimate with `-e`.
pub fn run_passgen<W: Write, R: RandomSource + ?Sized>(
    args: &PassgenArgs,
    generator: &PasswordGenerator,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    if args.entropy {
        let estimate = generator.estimate();
        debug!(
            bits = estimate.bits(),
            strength = entropy::strength(estimate.bits()),
            "password estimate"
        );
        writeln!(out, "{}", password_entropy_line(&estimate))?;
        return Ok(());
    }

    debug!(source = rng::source_name(), "generating password");
    let password = generator.generate(rng);
    write_secret(out, password.as_str())?;
    Ok(())
}

/// Print one passphrase from the dictionary, or its entropy with `-e`.
pub fn run_passphrase<W: Write, R: RandomSource + ?Sized>(
    args: &PassphraseArgs,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    let generator = PassphraseGenerator::new(WordList::load(&args.dictionary)?);

    if args.entropy {
        let estimate = generator.combinations();
        debug!(
            bits = estimate.bits(),
            strength = entropy::strength(estimate.bits()),
            "passphrase estimate"
        );
        writeln!(out, "{}", passphrase_entropy_line(&estimate))?;
        return Ok(());
    }

    let phrase = generator.generate(rng);
    write_secret(out, phrase.as_str())?;
    Ok(())
}
