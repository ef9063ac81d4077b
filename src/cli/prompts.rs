//! Messages on stderr.

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Check if stderr is a tty
pub fn stderr_is_terminal() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

/// Print an error message to stderr, red when stderr is a terminal
pub fn error(msg: &str) {
    if stderr_is_terminal() {
        eprintln!("{RED}error: {msg}{RESET}");
    } else {
        eprintln!("error: {msg}");
    }
}
