//! Passphrase generator: four random words from a dictionary file.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use passgen::cli::{self, PassphraseArgs};
use passgen::{exits, logging, rng};

fn main() -> ExitCode {
    exits::harden();
    logging::init();

    let args = PassphraseArgs::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run_passphrase(&args, &mut rng::os(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exits::fail(&e),
    }
}
