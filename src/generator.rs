//! Random password generation.

use rand::Rng;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::charset::GENERATION_POOL;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("password length must be at least 1, got {0}")]
    InvalidLength(usize),
}

/// Generates a random password of the requested length.
///
/// Each character is drawn independently and uniformly from the fixed pool
/// covering all four character classes. Draws come from the operating-system
/// random source, so the output is suitable for use as a real password.
///
/// # Errors
/// Returns `GeneratorError::InvalidLength` for a zero-length request.
pub fn generate_password(length: usize) -> Result<String, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::InvalidLength(length));
    }

    let pool = GENERATION_POOL.as_bytes();
    let mut rng = OsRng;
    let password: String = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "generated password");

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_length() {
        let password = generate_password(16).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_generated_chars_are_in_pool() {
        for _ in 0..20 {
            let password = generate_password(32).unwrap();
            for c in password.chars() {
                assert!(GENERATION_POOL.contains(c), "'{}' not in pool", c);
            }
        }
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert_eq!(generate_password(0), Err(GeneratorError::InvalidLength(0)));
    }

    #[test]
    fn test_single_char_password() {
        let password = generate_password(1).unwrap();
        assert_eq!(password.chars().count(), 1);
    }

    #[test]
    fn test_generated_password_scores() {
        // Any generated password analyzes without panicking and stays in
        // bounds; the analyzer and generator share the same class sets.
        use secrecy::SecretString;

        let password = generate_password(16).unwrap();
        let secret = SecretString::new(password.into());

        #[cfg(feature = "async")]
        let result = crate::analyzer::analyze(&secret, None);

        #[cfg(not(feature = "async"))]
        let result = crate::analyzer::analyze(&secret);

        assert!(result.score <= 100);
        assert!(result.tier.is_some());
    }
}
