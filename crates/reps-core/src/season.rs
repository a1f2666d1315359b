//! The four fixed three-month seasons.
//!
//! Spring is March-May, summer June-August, autumn September-November and
//! winter December-February (spanning the year boundary).

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season for a month number (1 = January).
    pub fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month())
    }

    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// One-word theme of the season.
    pub fn theme(&self) -> &'static str {
        match self {
            Self::Spring => "Growth",
            Self::Summer => "Peak",
            Self::Autumn => "Harvest",
            Self::Winter => "Rest",
        }
    }

    /// Prompt shown when there is nothing more specific to say.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Spring => "What new movement wants to find you today?",
            Self::Summer => "Your body is ready. What calls to you?",
            Self::Autumn => "What did your body teach you this week?",
            Self::Winter => "Gentle movement is still movement.",
        }
    }

    pub fn philosophy(&self) -> &'static str {
        match self {
            Self::Spring => "A season for trying, exploring, beginning again.",
            Self::Summer => "A season of strength, consistency, and fire.",
            Self::Autumn => "A season to reflect, gather, and appreciate the work.",
            Self::Winter => "A season for rest, recovery, and quiet strength.",
        }
    }

    /// `[start, end)` of the season containing `date`.
    ///
    /// `None` only at the edges of the representable calendar.
    pub fn bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let (year, month) = match Self::for_date(date) {
            Self::Spring => (date.year(), 3),
            Self::Summer => (date.year(), 6),
            Self::Autumn => (date.year(), 9),
            Self::Winter if date.month() == 12 => (date.year(), 12),
            Self::Winter => (date.year() - 1, 12),
        };
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(3))?;
        Some((start, end))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a date within its season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonDay {
    pub season: Season,
    /// 1 on the first day of the season
    pub current_day: u32,
    pub total_days: u32,
}

pub fn season_day(date: NaiveDate) -> Option<SeasonDay> {
    let (start, end) = Season::bounds(date)?;
    let current_day = u32::try_from((date - start).num_days() + 1).ok()?;
    let total_days = u32::try_from((end - start).num_days()).ok()?;
    Some(SeasonDay {
        season: Season::for_date(date),
        current_day,
        total_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_mapping() {
        assert_eq!(Season::for_month(2), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Spring);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(11), Season::Autumn);
        assert_eq!(Season::for_month(12), Season::Winter);
    }

    #[test]
    fn test_fixed_season_lengths() {
        assert_eq!(season_day(day(2026, 3, 1)).unwrap().current_day, 1);
        assert_eq!(season_day(day(2026, 4, 15)).unwrap().total_days, 92);
        assert_eq!(season_day(day(2026, 8, 31)).unwrap().current_day, 92);
        assert_eq!(season_day(day(2026, 10, 18)).unwrap().total_days, 91);
    }

    #[test]
    fn test_winter_before_leap_february() {
        // Winter 2027-28 ends in a leap February.
        let dec = season_day(day(2027, 12, 31)).unwrap();
        assert_eq!(dec.season, Season::Winter);
        assert_eq!(dec.current_day, 31);
        assert_eq!(dec.total_days, 91);

        let feb = season_day(day(2028, 2, 29)).unwrap();
        assert_eq!(feb.current_day, 91);
        assert_eq!(feb.total_days, 91);
    }

    #[test]
    fn test_winter_in_common_year() {
        let jan = season_day(day(2026, 1, 1)).unwrap();
        assert_eq!(jan.current_day, 32);
        assert_eq!(jan.total_days, 90);
        assert_eq!(
            Season::bounds(day(2026, 2, 28)),
            Some((day(2025, 12, 1), day(2026, 3, 1)))
        );
    }
}
