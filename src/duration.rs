//! Duration token parsing and rendering.
//!
//! Moderation commands take free-form duration tokens like `30m`, `2h`,
//! `1d`, `1w`. Both Latin and Cyrillic unit suffixes are accepted; a bare
//! number means minutes.

use chrono::Duration;

/// Parse a duration token like "30m", "2ч", "1d", "1w", or a bare "15".
///
/// Returns `None` for empty, malformed, or negative input. No upper bound
/// is applied; callers decide defaults when parsing fails.
pub fn parse_duration(token: &str) -> Option<Duration> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }

    let (num, unit) = if let Some(stripped) = token.strip_suffix(['m', 'м']) {
        (stripped, 'm')
    } else if let Some(stripped) = token.strip_suffix(['h', 'ч']) {
        (stripped, 'h')
    } else if let Some(stripped) = token.strip_suffix(['d', 'д']) {
        (stripped, 'd')
    } else if let Some(stripped) = token.strip_suffix(['w', 'н']) {
        (stripped, 'w')
    } else {
        (token.as_str(), 'm')
    };

    let value: i64 = num.parse().ok().filter(|v| *v >= 0)?;
    match unit {
        'm' => Some(Duration::minutes(value)),
        'h' => Some(Duration::hours(value)),
        'd' => Some(Duration::days(value)),
        'w' => Some(Duration::weeks(value)),
        _ => None,
    }
}

/// Render a duration for reply text: minutes under an hour, hours under a
/// day, whole days otherwise.
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    if secs < 3600 {
        format!("{} min", secs / 60)
    } else if secs < 86_400 {
        format!("{} h", secs / 3600)
    } else {
        format!("{} d", secs / 86_400)
    }
}
