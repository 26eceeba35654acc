//! Length section - recommends 12+ characters.

/// Recommended minimum length. Shorter passwords always get the length
/// suggestion, whatever their score.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Suggests a longer password when below the recommended length.
///
/// # Returns
/// - `Some(suggestion)` if the password is shorter than 12 characters
/// - `None` otherwise
pub fn length_suggestion(password: &str) -> Option<String> {
    if password.chars().count() < RECOMMENDED_LENGTH {
        return Some("Longer length (12+ characters)".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_suggestion_short() {
        assert_eq!(
            length_suggestion("Short1!"),
            Some("Longer length (12+ characters)".to_string())
        );
    }

    #[test]
    fn test_length_suggestion_eleven_chars() {
        assert!(length_suggestion("elevenchars").is_some());
    }

    #[test]
    fn test_length_suggestion_exactly_recommended() {
        assert_eq!(length_suggestion("twelve-chars"), None);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Twelve characters, more than twelve bytes.
        assert_eq!(length_suggestion("ññññññññññññ"), None);
    }
}
