//! Property-based tests for password generation over arbitrary valid
//! configurations.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use passgen::{Category, ConfigError, Configuration, PasswordGenerator};

const POOL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Disjoint categories carved out of consecutive slices of `POOL`.
fn categories(sizes: &[usize]) -> Vec<Category> {
    let pool: Vec<char> = POOL.chars().collect();
    let mut start = 0;
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let alphabet: String = pool[start..start + size].iter().collect();
            start += size;
            Category::new(format!("cat{i}"), &alphabet).expect("valid category")
        })
        .collect()
}

fn config_strategy() -> impl Strategy<Value = Configuration> {
    (prop::collection::vec(1usize..=10, 1..=5), 0usize..20).prop_map(|(sizes, extra)| {
        let categories = categories(&sizes);
        let length = categories.len() + extra;
        Configuration::new(categories, length).expect("valid configuration")
    })
}

proptest! {
    #[test]
    fn password_has_configured_length(config in config_strategy(), seed in any::<u64>()) {
        let length = config.length();
        let generator = PasswordGenerator::new(config);
        let password = generator.generate(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(password.len(), length);
    }

    #[test]
    fn password_covers_every_category(config in config_strategy(), seed in any::<u64>()) {
        let generator = PasswordGenerator::new(config);
        let password = generator.generate(&mut StdRng::seed_from_u64(seed));
        for category in generator.config().categories() {
            prop_assert!(password.as_str().chars().any(|c| category.contains(c)));
        }
    }

    #[test]
    fn password_stays_inside_alphabet(config in config_strategy(), seed in any::<u64>()) {
        let generator = PasswordGenerator::new(config);
        let password = generator.generate(&mut StdRng::seed_from_u64(seed));
        prop_assert!(password.as_str().chars().all(|c| generator.alphabet().contains(&c)));
    }

    #[test]
    fn estimate_follows_formula(config in config_strategy()) {
        let sizes: Vec<f64> = config.categories().iter().map(|c| c.len() as f64).collect();
        let free = (config.length() - sizes.len()) as i32;
        let expected = sizes.iter().product::<f64>() * sizes.iter().sum::<f64>().powi(free);

        let estimate = PasswordGenerator::new(config).estimate_combinations();
        prop_assert!((estimate - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn more_categories_than_length_is_rejected(count in 2usize..=6, short_by in 1usize..=5) {
        prop_assume!(short_by < count);
        let length = count - short_by;
        let result = Configuration::new(categories(&vec![2; count]), length);
        prop_assert_eq!(
            result,
            Err(ConfigError::TooManyCategories { categories: count, length })
        );
    }
}
