//! Season summary: the numbers behind the end-of-season story.

use chrono::NaiveDate;
use serde::Serialize;

use crate::season::Season;
use crate::stats::{local_day, longest_streak, most_common_feeling, most_common_type};
use crate::storage::{Feeling, MovementSession, MovementType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub total_sessions: usize,
    pub most_common_type: Option<(MovementType, usize)>,
    pub most_common_feeling: Option<(Feeling, usize)>,
    pub longest_streak: Option<u32>,
}

impl SeasonSummary {
    pub fn compute(season: Season, sessions: &[MovementSession]) -> Self {
        Self {
            season,
            total_sessions: sessions.len(),
            most_common_type: most_common_type(sessions),
            most_common_feeling: most_common_feeling(sessions),
            longest_streak: longest_streak(sessions),
        }
    }
}

/// Sessions falling inside the season that contains `today`.
pub fn sessions_in_season(sessions: &[MovementSession], today: NaiveDate) -> Vec<MovementSession> {
    let Some((start, end)) = Season::bounds(today) else {
        return Vec::new();
    };
    sessions
        .iter()
        .filter(|s| {
            let day = local_day(s.date);
            day >= start && day < end
        })
        .cloned()
        .collect()
}
