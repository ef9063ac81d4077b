//! Formatting and writing of CLI output.

use std::io::Write;

use zeroize::Zeroize;

use crate::entropy::Estimate;

/// `More than <n> combinations ~ <bits> bits of entropy.`
///
/// "More than" because the password estimate is a lower bound.
pub fn password_entropy_line(estimate: &Estimate) -> String {
    format!(
        "More than {estimate} combinations ~ {:.1} bits of entropy.",
        estimate.bits()
    )
}

/// `<n> combinations ~ <bits> bits of entropy.` for exact counts.
pub fn passphrase_entropy_line(estimate: &Estimate) -> String {
    format!("{estimate} combinations ~ {:.1} bits of entropy.", estimate.bits())
}

/// Write `secret` plus a newline in one call, wiping the staging buffer.
pub fn write_secret<W: Write>(out: &mut W, secret: &str) -> std::io::Result<()> {
    let mut line = Vec::with_capacity(secret.len() + 1);
    line.extend_from_slice(secret.as_bytes());
    line.push(b'\n');
    let result = out.write_all(&line).and_then(|()| out.flush());
    line.zeroize();
    result
}
