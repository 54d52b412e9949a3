use chrono::{DateTime, Utc};

/// Format a timestamp as a 24-hour `HH:MM` UTC clock display.
/// Entries without a timestamp yield an empty string, never an error.
pub fn format_clock(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Format a timestamp as a `YYYY-MM-DD` UTC calendar date, or the literal
/// `unknown` if absent.
pub fn format_day(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "unknown".to_string(),
    }
}
