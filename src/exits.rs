//! Process setup and exit codes.

use std::process::ExitCode;

use crate::cli::prompts;
use crate::error::Error;

/// Configuration or runtime failure. Usage errors exit with 2 through clap.
pub const FAILURE: u8 = 1;

/// Keep generated secrets out of core dumps and away from ptrace.
/// Call this early in main().
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Report `err` on stderr and map it to the failure exit code.
pub fn fail(err: &Error) -> ExitCode {
    tracing::debug!(error = ?err, "exiting with failure");
    prompts::error(&err.to_string());
    ExitCode::from(FAILURE)
}
