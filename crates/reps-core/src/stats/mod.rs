//! Derived statistics over an already-loaded session collection.
//!
//! All functions are pure. Calendar-day math uses the local time zone:
//! a session's day is the local date of its timestamp.

pub mod frequency;
pub mod streak;
pub mod summary;

use chrono::{DateTime, Local, NaiveDate, Utc};

pub use frequency::{feeling_counts, most_common_feeling, most_common_type, type_counts};
pub use streak::{longest_streak, presence_row, PRESENCE_DAYS};
pub use summary::{sessions_in_season, SeasonSummary};

/// Local calendar day of a timestamp.
pub fn local_day(date: DateTime<Utc>) -> NaiveDate {
    date.with_timezone(&Local).date_naive()
}

/// Today's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar days between `date` and `today` (negative for the future).
pub fn days_ago(date: DateTime<Utc>, today: NaiveDate) -> i64 {
    (today - local_day(date)).num_days()
}

/// "Today", "Yesterday" or "N days ago".
pub fn day_label(days_ago: i64) -> String {
    match days_ago {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{day, noon};
    use super::*;

    #[test]
    fn test_days_ago_ignores_time_of_day() {
        let today = day(2026, 3, 10);
        assert_eq!(days_ago(noon(day(2026, 3, 10)), today), 0);
        assert_eq!(days_ago(noon(day(2026, 3, 9)), today), 1);
        assert_eq!(days_ago(noon(day(2026, 2, 28)), today), 10);
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(0), "Today");
        assert_eq!(day_label(1), "Yesterday");
        assert_eq!(day_label(6), "6 days ago");
    }
}
