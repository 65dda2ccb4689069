//! Short code generation.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric short code.
///
/// Uniqueness is not guaranteed here; callers check the repository and retry
/// on collision (see `LinkService::generate_unique_code`).
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_varies() {
        let mut codes = HashSet::new();

        for _ in 0..100 {
            codes.insert(generate_code());
        }

        // 6 alphanumeric chars give ~5.7e10 combinations; 100 draws
        // colliding would indicate a broken generator.
        assert!(codes.len() > 95);
    }
}
