//! Random number generation.
//!
//! Generators never hold RNG state of their own: every call takes a
//! `&mut impl RandomSource`. Production code uses the operating system CSPRNG
//! through [`os`]; tests pass a seeded `StdRng`.

use rand::Rng;
use rand::rngs::OsRng;

/// Uniform integer source over the closed range `[0, upper - 1]`.
pub trait RandomSource {
    /// Draw an index uniformly from `0..upper`. `upper` must be non-zero.
    fn index(&mut self, upper: usize) -> usize;
}

// `gen_range` rejects out-of-zone samples instead of reducing modulo `upper`,
// so small alphabets carry no bias.
impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// The operating system's cryptographically secure generator.
#[inline]
pub fn os() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}
