//! String formatting utilities for UI rendering.

use chrono::{DateTime, Local, Utc};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a datetime for display in local time.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.with_timezone(&Local).format("%a %b %-d, %H:%M").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Local calendar date.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Weight without a trailing `.0`.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(135.0), "135");
        assert_eq!(format_weight(22.5), "22.5");
    }

    #[test]
    fn test_format_datetime_plain_is_rfc3339() {
        let dt = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
            .expect("parse")
            .with_timezone(&Utc);
        assert_eq!(format_datetime(&dt, false), "2026-01-02T03:04:05+00:00");
    }
}
