//! Suggestion sections
//!
//! Each section checks one aspect of the password and yields a remediation
//! suggestion when it fails. The analyzer runs them in a fixed order (length
//! first, then the four character classes) and the order of the resulting
//! suggestions is part of the contract.

mod classes;
mod length;

pub use classes::{
    lowercase_suggestion, number_suggestion, symbol_suggestion, uppercase_suggestion,
};
pub use length::length_suggestion;

/// A suggestion check.
/// - `Some(suggestion)` - Check failed, suggestion should be surfaced
/// - `None` - Check passed
pub type SuggestionCheck = fn(&str) -> Option<String>;

/// The checks in their fixed evaluation order.
pub fn suggestion_checks() -> [(&'static str, SuggestionCheck); 5] {
    [
        ("length", length_suggestion),
        ("uppercase", uppercase_suggestion),
        ("lowercase", lowercase_suggestion),
        ("number", number_suggestion),
        ("symbol", symbol_suggestion),
    ]
}
