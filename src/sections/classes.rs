//! Character-class sections - one suggestion per missing class.

use crate::charset::CharacterClasses;

/// Suggests uppercase letters when none are present.
pub fn uppercase_suggestion(password: &str) -> Option<String> {
    if !CharacterClasses::detect(password).has_upper {
        return Some("Uppercase letters".to_string());
    }
    None
}

/// Suggests lowercase letters when none are present.
pub fn lowercase_suggestion(password: &str) -> Option<String> {
    if !CharacterClasses::detect(password).has_lower {
        return Some("Lowercase letters".to_string());
    }
    None
}

/// Suggests digits when none are present.
pub fn number_suggestion(password: &str) -> Option<String> {
    if !CharacterClasses::detect(password).has_number {
        return Some("Numbers".to_string());
    }
    None
}

/// Suggests symbols when none from the fixed symbol set are present.
pub fn symbol_suggestion(password: &str) -> Option<String> {
    if !CharacterClasses::detect(password).has_symbol {
        return Some("Symbols (like !@#$)".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_suggestion_missing() {
        let result = uppercase_suggestion("lowercase123!");
        assert_eq!(result, Some("Uppercase letters".to_string()));
    }

    #[test]
    fn test_lowercase_suggestion_missing() {
        let result = lowercase_suggestion("UPPERCASE123!");
        assert_eq!(result, Some("Lowercase letters".to_string()));
    }

    #[test]
    fn test_number_suggestion_missing() {
        let result = number_suggestion("NoNumbers!");
        assert_eq!(result, Some("Numbers".to_string()));
    }

    #[test]
    fn test_symbol_suggestion_missing() {
        let result = symbol_suggestion("NoSymbols123");
        assert_eq!(result, Some("Symbols (like !@#$)".to_string()));
    }

    #[test]
    fn test_symbol_suggestion_non_member_punctuation() {
        // Dash is outside the fixed symbol set, so the suggestion still fires.
        assert!(symbol_suggestion("still-missing-123").is_some());
    }

    #[test]
    fn test_all_classes_present() {
        let pwd = "HasAll123!@#";
        assert_eq!(uppercase_suggestion(pwd), None);
        assert_eq!(lowercase_suggestion(pwd), None);
        assert_eq!(number_suggestion(pwd), None);
        assert_eq!(symbol_suggestion(pwd), None);
    }
}
