//! Combination counts and entropy in bits.
//!
//! Counts are tracked twice: exactly in `u128` while the value fits, and as
//! an `f64` that stays usable (with rounding) once it does not. `f64` is
//! exact up to 2^53.

use std::fmt;

/// A combination count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    exact: Option<u128>,
    approx: f64,
}

impl Estimate {
    pub fn one() -> Self {
        Self {
            exact: Some(1),
            approx: 1.0,
        }
    }

    /// Multiply by `factor`.
    pub fn times(self, factor: usize) -> Self {
        let exact = self.exact.and_then(|e| e.checked_mul(factor as u128));
        let approx = match exact {
            Some(v) => v as f64,
            None => self.approx * factor as f64,
        };
        Self { exact, approx }
    }

    /// Multiply by `base ^ exp`.
    pub fn times_pow(self, base: usize, exp: usize) -> Self {
        let exact = self.exact.and_then(|e| {
            let exp = u32::try_from(exp).ok()?;
            (base as u128).checked_pow(exp)?.checked_mul(e)
        });
        let approx = match exact {
            Some(v) => v as f64,
            None => self.approx * (base as f64).powf(exp as f64),
        };
        Self { exact, approx }
    }

    /// Exact count, if it fits in a `u128`.
    pub fn exact(&self) -> Option<u128> {
        self.exact
    }

    pub fn approx(&self) -> f64 {
        self.approx
    }

    /// Entropy in bits: `log2(count)`.
    pub fn bits(&self) -> f64 {
        self.approx.log2()
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exact {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "{:.0}", self.approx),
        }
    }
}

/// Coarse strength label for an entropy in bits. Only written to debug logs,
/// never to the entropy line on stdout.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_zero_bits() {
        assert_eq!(Estimate::one().bits(), 0.0);
        assert_eq!(Estimate::one().to_string(), "1");
    }

    #[test]
    fn times_and_pow_stay_exact() {
        let e = Estimate::one().times(24).times(24).times(8).times_pow(56, 5);
        assert_eq!(e.exact(), Some(2_537_772_023_808));
        assert_eq!(e.approx(), 2_537_772_023_808.0);
        assert_eq!(e.to_string(), "2537772023808");
    }

    #[test]
    fn overflow_falls_back_to_float() {
        let e = Estimate::one().times_pow(1 << 20, 10);
        assert_eq!(e.exact(), None);
        assert!(e.approx().is_finite());
        assert!((e.bits() - 200.0).abs() < 1e-9);
        assert!(e.to_string().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn huge_exponent_does_not_panic() {
        let e = Estimate::one().times_pow(2, usize::MAX);
        assert_eq!(e.exact(), None);
        assert!(e.approx().is_infinite());
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(strength(20.0), "Weak");
        assert_eq!(strength(41.2), "Fair");
        assert_eq!(strength(60.0), "Strong");
        assert_eq!(strength(128.0), "Very Strong");
    }
}
