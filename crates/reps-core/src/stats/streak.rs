//! Consecutive-day streaks and the two-week presence row.

use chrono::NaiveDate;

use crate::stats::{days_ago, local_day};
use crate::storage::MovementSession;

/// Number of days shown in the presence row.
pub const PRESENCE_DAYS: usize = 14;

/// Longest run of consecutive calendar days with at least one session.
///
/// Several sessions on one day count once. Returns `None` for fewer than
/// two sessions.
pub fn longest_streak(sessions: &[MovementSession]) -> Option<u32> {
    if sessions.len() < 2 {
        return None;
    }

    let mut days: Vec<NaiveDate> = sessions.iter().map(|s| local_day(s.date)).collect();
    days.sort_unstable();

    let mut longest = 0;
    let mut current = 1;
    for pair in days.windows(2) {
        let delta = (pair[1] - pair[0]).num_days();
        if delta == 1 {
            current += 1;
        } else if delta > 1 {
            longest = longest.max(current);
            current = 1;
        }
    }

    Some(longest.max(current))
}

/// Whether each of the last fourteen days has a session.
///
/// Index 0 is thirteen days ago, the last index is `today`.
pub fn presence_row(sessions: &[MovementSession], today: NaiveDate) -> [bool; PRESENCE_DAYS] {
    let mut row = [false; PRESENCE_DAYS];
    let window = PRESENCE_DAYS as i64;
    for session in sessions {
        let ago = days_ago(session.date, today);
        if (0..window).contains(&ago) {
            row[(window - 1 - ago) as usize] = true;
        }
    }
    row
}
