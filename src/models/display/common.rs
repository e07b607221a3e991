//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Placeholder for absent values
pub const NONE: &str = "-";

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NONE.to_string())
}

/// Calendar date of a timestamp (YYYY-MM-DD)
pub fn format_date(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NONE.to_string())
}

pub fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
