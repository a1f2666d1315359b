//! WMO weather interpretation codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse sky condition derived from a WMO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    #[serde(rename = "Partly cloudy")]
    PartlyCloudy,
    Cloudy,
    Foggy,
    Drizzle,
    Rain,
    Snow,
    #[serde(rename = "Rain showers")]
    RainShowers,
    #[serde(rename = "Snow showers")]
    SnowShowers,
    Thunderstorm,
}

impl WeatherCondition {
    /// Map a WMO code; anything unrecognized reads as clear.
    pub fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Foggy,
            51..=57 => Self::Drizzle,
            61..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::RainShowers,
            85..=86 => Self::SnowShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Foggy => "Foggy",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
