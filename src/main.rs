use std::io;
use std::process::ExitCode;

use clap::Parser;

use passgen::cli::{self, PassgenArgs};
use passgen::{PasswordGenerator, exits, logging, rng};

fn main() -> ExitCode {
    exits::harden();
    logging::init();

    let args = PassgenArgs::parse();
    let generator = PasswordGenerator::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run_passgen(&args, &generator, &mut rng::os(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exits::fail(&e),
    }
}
