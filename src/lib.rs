//! Password strength meter library
//!
//! This library scores a password with a heuristic entropy model, projects
//! an estimated brute-force crack time, and can generate a random strong
//! password. Everything is pure and synchronous; the view layer wrapping it
//! is expected to call [`analyze`] per keystroke and render the result.
//!
//! The scoring model is a presentation heuristic, not a security guarantee:
//! entropy assumes uniform independent characters, and the 0-100 score is a
//! fixed scaling of that estimate.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{analyze, generate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let result = analyze(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let result = analyze(&password);
//!
//! println!("Score: {}", result.score);
//! println!("Tier: {:?}", result.tier);
//! println!("Crack time: {}", result.crack_time);
//!
//! let suggestion = generate_password(16).expect("valid length");
//! println!("Try instead: {}", suggestion);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod cracktime;
mod flow;
mod generator;
mod sections;
mod types;

// Public API
pub use analyzer::analyze;
pub use charset::{CharacterClasses, GENERATION_POOL, SYMBOLS};
pub use cracktime::{GUESSES_PER_SECOND, format_crack_time, format_duration};
pub use flow::{
    ANIMATION_DWELL, FlowEvent, SCREEN_FADE, SPLASH_DWELL, SPLASH_FADE, Screen, ScreenFlow,
};
pub use generator::{GeneratorError, generate_password};
pub use types::{AnalysisResult, StrengthTier};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;
