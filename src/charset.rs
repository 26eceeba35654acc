//! Fixed character classes shared by the analyzer and the generator.

/// The symbol class is this exact set, not "anything non-alphanumeric".
pub const SYMBOLS: &str = "!@#$%^&*()_+={}[]:;\"'<,>.?/\\|";

/// Pool the generator draws from: all four classes concatenated.
pub const GENERATION_POOL: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+={}[]:;\"'<,>.?/\\|";

/// Per-class alphabet sizes used for the search-space estimate. The symbol
/// contribution is the fixed constant 32 regardless of how many characters
/// the membership set lists.
pub const LOWER_SPACE: u32 = 26;
pub const UPPER_SPACE: u32 = 26;
pub const DIGIT_SPACE: u32 = 10;
pub const SYMBOL_SPACE: u32 = 32;

/// Which of the four character classes a password contains.
///
/// Non-ASCII characters match no class: they count toward length but
/// contribute nothing to the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_symbol: bool,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        CharacterClasses {
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| SYMBOLS.contains(c)),
        }
    }

    /// Total count of distinct characters available across detected classes.
    /// Zero only when no class is present.
    pub fn search_space(&self) -> u32 {
        let mut space = 0;
        if self.has_lower {
            space += LOWER_SPACE;
        }
        if self.has_upper {
            space += UPPER_SPACE;
        }
        if self.has_number {
            space += DIGIT_SPACE;
        }
        if self.has_symbol {
            space += SYMBOL_SPACE;
        }
        space
    }
}
