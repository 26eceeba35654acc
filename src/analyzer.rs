//! Password analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::CharacterClasses;
use crate::cracktime::format_crack_time;
use crate::sections::suggestion_checks;
use crate::types::{AnalysisResult, StrengthTier};

/// Score multiplier applied to the entropy estimate. The x3 scale and the
/// clamp at 100 are fixed constants of the scoring model.
const SCORE_MULTIPLIER: f64 = 3.0;
const SCORE_CAP: f64 = 100.0;

/// Entropy estimate in bits: length times log2 of the search space.
///
/// Assumes independent, uniform selection from the detected class alphabet;
/// repeats, dictionary words and patterns are deliberately ignored.
fn entropy_bits(length: usize, search_space: u32) -> f64 {
    if search_space == 0 {
        return 0.0;
    }
    length as f64 * f64::from(search_space).log2()
}

fn score_from_entropy(entropy: f64) -> u8 {
    (entropy * SCORE_MULTIPLIER).round().min(SCORE_CAP) as u8
}

/// Analyzes a password and returns a detailed result.
///
/// Total over all string input: empty, arbitrarily long and non-ASCII text
/// all produce a result. Empty input yields the sentinel result with no tier.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `token` - Optional cancellation token (async feature only)
pub fn analyze(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> AnalysisResult {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    if length == 0 {
        return AnalysisResult::empty();
    }

    let classes = CharacterClasses::detect(pwd);
    let search_space = classes.search_space();
    let entropy = entropy_bits(length, search_space);
    let score = score_from_entropy(entropy);
    let tier = StrengthTier::classify(score, length);

    // Suggestion checks run in fixed order, length first.
    let mut suggestions = Vec::new();
    for (_check_name, check_fn) in suggestion_checks() {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("analysis cancelled during section: {}", _check_name);
                    return AnalysisResult {
                        tier: None,
                        score,
                        entropy,
                        feedback: "Analysis cancelled.".to_string(),
                        suggestions,
                        crack_time: String::new(),
                    };
                }
            }
        }

        if let Some(suggestion) = check_fn(pwd) {
            suggestions.push(suggestion);
        }
    }

    let mut feedback = tier.base_feedback().to_string();
    // Strong results never surface the suggestions clause, even when the
    // internal list is non-empty.
    if tier != StrengthTier::Strong && !suggestions.is_empty() {
        feedback.push_str(&format!(" Suggestions: Add {}.", suggestions.join(", ")));
    }

    let crack_time = format_crack_time(entropy);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        tier = tier.as_str(),
        score,
        entropy,
        "password analysis complete"
    );

    AnalysisResult {
        tier: Some(tier),
        score,
        entropy,
        feedback,
        suggestions,
        crack_time,
    }
}

/// Async version that debounces, analyzes, and sends the result via channel.
///
/// Intended for per-keystroke callers: the short sleep lets a superseded
/// call be cancelled before any work happens.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let result = analyze(password, Some(token));

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
