//! Brute-force crack-time projection and coarse duration formatting.

/// Assumed attacker guess rate, guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1e11;

/// Rendered when the projected duration overflows the floating-point range.
pub const OVERFLOW_SENTINEL: &str = "centuries: effectively never";

/// Expected brute-force duration in seconds for a given entropy estimate.
///
/// `2^entropy` equals `search_space^length`, the full search-space size.
/// Large entropy overflows to infinity; the formatter handles that.
pub fn crack_seconds(entropy: f64) -> f64 {
    entropy.exp2() / GUESSES_PER_SECOND
}

/// Formats an entropy estimate as a human-readable crack-time projection.
pub fn format_crack_time(entropy: f64) -> String {
    format_duration(crack_seconds(entropy))
}

/// Formats a duration in seconds into the first matching coarse band.
///
/// Rounding is half-away-from-zero at every step; there is no carrying
/// between units beyond the cascading division.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return OVERFLOW_SENTINEL.to_string();
    }
    if seconds < 1.0 {
        return "Instantly (less than 1 second)".to_string();
    }
    if seconds < 60.0 {
        return format!("{} seconds", seconds.round());
    }

    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return format!("{} minutes", minutes.round());
    }

    let hours = minutes / 60.0;
    if hours < 24.0 {
        return format!("{} hours", hours.round());
    }

    let days = hours / 24.0;
    if days < 365.0 {
        return format!("{} days", days.round());
    }

    let years = days / 365.25;
    if years < 1000.0 {
        return format!("{} years", years.round());
    }

    let centuries = years / 100.0;
    if !centuries.is_finite() {
        return OVERFLOW_SENTINEL.to_string();
    }
    format!("{:.2} centuries", centuries)
}
