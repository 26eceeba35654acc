//! Result types for password analysis.

use std::fmt;

/// Score threshold for the strong tier.
pub const STRONG_SCORE: u8 = 80;
/// Length floor for the strong tier.
pub const STRONG_LENGTH: usize = 12;
/// Score threshold for the medium tier.
pub const MEDIUM_SCORE: u8 = 50;
/// Length floor for the medium tier.
pub const MEDIUM_LENGTH: usize = 8;

/// Placeholder feedback for empty input (no analysis performed).
pub const EMPTY_FEEDBACK: &str = "Start typing to see the analysis.";

/// Coarse strength category used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Classifies a password from its score and length.
    ///
    /// First match wins: `Strong` requires both a high score and 12+
    /// characters; `Medium` requires a moderate score and 8+ characters.
    /// Length is a hard floor independent of score, so a short password
    /// never reaches `Strong` no matter how high it scores.
    pub fn classify(score: u8, length: usize) -> Self {
        if score >= STRONG_SCORE && length >= STRONG_LENGTH {
            StrengthTier::Strong
        } else if score >= MEDIUM_SCORE && length >= MEDIUM_LENGTH {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        }
    }

    /// Tier-specific feedback sentence, before any suggestions clause.
    pub(crate) fn base_feedback(&self) -> &'static str {
        match self {
            StrengthTier::Strong => "Strong! This password is highly secure.",
            StrengthTier::Medium => "Medium. Aim for 12+ characters and more variety.",
            StrengthTier::Weak => "Weak. Needs to be longer and include varied characters.",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single analysis call.
///
/// Constructed fresh on every call and immutable once returned. `tier` is
/// `None` when no analysis was performed (empty input, or cancellation under
/// the `async` feature) — callers must not render that as "weak".
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub tier: Option<StrengthTier>,
    /// Normalized score in `[0, 100]`.
    pub score: u8,
    /// Heuristic entropy estimate in bits.
    pub entropy: f64,
    pub feedback: String,
    /// Remediation suggestions in fixed order (length first).
    pub suggestions: Vec<String>,
    /// Formatted brute-force crack-time projection.
    pub crack_time: String,
}

impl AnalysisResult {
    /// Sentinel for empty input: no tier, placeholder feedback, nothing else.
    pub fn empty() -> Self {
        AnalysisResult {
            tier: None,
            score: 0,
            entropy: 0.0,
            feedback: EMPTY_FEEDBACK.to_string(),
            suggestions: Vec::new(),
            crack_time: String::new(),
        }
    }
}
