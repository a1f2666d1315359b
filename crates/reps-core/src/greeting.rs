//! Time-of-day greetings with an optional weather clause.

use crate::weather::{Weather, WeatherCondition};

/// Part of the day a greeting is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    EarlyMorning,
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// Slot for a local hour (0-23).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=6 => Self::EarlyMorning,
            7..=10 => Self::Morning,
            11..=12 => Self::Midday,
            13..=16 => Self::Afternoon,
            17..=19 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Self::EarlyMorning => &[
                "Early one today.",
                "Up before the sun.",
                "Quiet morning.",
                "Beat the alarm.",
            ],
            Self::Morning => &["Morning.", "Good morning.", "Fresh start.", "New day."],
            Self::Midday => &[
                "Midday break?",
                "Lunchtime move?",
                "Middle of the day.",
                "Halfway through.",
            ],
            Self::Afternoon => &[
                "Afternoon.",
                "Got anything left in the tank?",
                "Afternoon session?",
                "Still going.",
            ],
            Self::Evening => &[
                "Still time.",
                "Evening.",
                "Winding down or gearing up?",
                "End of day.",
            ],
            Self::Night => &[
                "Late one.",
                "Night owl.",
                "Burning the midnight oil.",
                "After hours.",
            ],
        }
    }
}

/// Base greeting for `hour`; `pick` selects among the slot's phrases.
pub fn time_greeting(hour: u32, pick: usize) -> &'static str {
    let phrases = TimeSlot::for_hour(hour).phrases();
    phrases[pick % phrases.len()]
}

/// Round half up, as a phone's weather widget would.
fn round_temperature(temperature: f64) -> i64 {
    (temperature + 0.5).floor() as i64
}

/// Short, conversational description of the weather.
pub fn weather_clause(temperature: i64, condition: Option<WeatherCondition>) -> String {
    let t = temperature;
    match condition {
        Some(WeatherCondition::Rain | WeatherCondition::RainShowers | WeatherCondition::Drizzle) => {
            return format!("{}° and raining.", t);
        }
        Some(WeatherCondition::Snow | WeatherCondition::SnowShowers) => {
            return format!("{}° and snowing.", t);
        }
        Some(WeatherCondition::Thunderstorm) => return format!("{}° and stormy.", t),
        Some(WeatherCondition::Foggy) => return format!("{}° and foggy.", t),
        Some(WeatherCondition::Clear) if t > 65 && t < 80 => {
            return format!("Nice day — {}° and clear.", t);
        }
        _ => {}
    }

    if t < 32 {
        format!("It's cold. {}°.", t)
    } else if t < 45 {
        format!("{}° and crisp out there.", t)
    } else if t > 95 {
        format!("{}° and brutal.", t)
    } else if t > 85 {
        format!("Warming up — {}°.", t)
    } else if !(55..=75).contains(&t) {
        format!("{}° outside.", t)
    } else {
        format!("{}°.", t)
    }
}

/// Greeting line, with the weather appended when it is known.
pub fn greeting(hour: u32, pick: usize, weather: Option<&Weather>) -> String {
    let base = time_greeting(hour, pick);
    match weather {
        Some(w) => format!(
            "{} {}",
            base,
            weather_clause(round_temperature(w.temperature), Some(w.condition))
        ),
        None => base.to_string(),
    }
}
