//! Password space estimate.

use super::charset;
use super::generate::PasswordGenerator;
use crate::entropy::Estimate;

impl PasswordGenerator {
    /// Lower bound on the number of distinct passwords.
    ///
    /// Counts one forced slot per category, drawn from that category alone,
    /// and the remaining slots drawn from the combined alphabet. Which slot
    /// each category lands in is not counted, so the real space is larger.
    pub fn estimate(&self) -> Estimate {
        let categories = self.config().categories();
        let forced = categories
            .iter()
            .fold(Estimate::one(), |acc, category| acc.times(category.len()));

        let free = self.config().length() - categories.len();
        forced.times_pow(charset::size(categories), free)
    }

    /// [`estimate`](Self::estimate) as a real number.
    pub fn estimate_combinations(&self) -> f64 {
        self.estimate().approx()
    }
}
