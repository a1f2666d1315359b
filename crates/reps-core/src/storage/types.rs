//! Core data types persisted by the record stores.
//!
//! Field names are camelCase on disk so existing exports of the mobile app
//! (`templateId`, `workoutDetails`) load without conversion.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RepsError;

/// One named exercise in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named, reusable list of exercises a workout can be started from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Generated on creation, never changed
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Logged metrics for one exercise inside a workout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseInstance {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A dated execution of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutInstance {
    pub id: String,

    /// Soft reference; the template may since have been deleted
    pub template_id: String,

    /// Template name captured when the workout was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub exercises: Vec<ExerciseInstance>,
}

/// Kind of movement logged in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Lifted,
    Walked,
    Ran,
    Stretched,
    Played,
    Moved,
}

impl MovementType {
    pub const ALL: [MovementType; 6] = [
        MovementType::Lifted,
        MovementType::Walked,
        MovementType::Ran,
        MovementType::Stretched,
        MovementType::Played,
        MovementType::Moved,
    ];

    /// Stored identifier (`lifted`, `walked`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lifted => "lifted",
            Self::Walked => "walked",
            Self::Ran => "ran",
            Self::Stretched => "stretched",
            Self::Played => "played",
            Self::Moved => "moved",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lifted => "Lifted",
            Self::Walked => "Walked",
            Self::Ran => "Ran",
            Self::Stretched => "Stretched",
            Self::Played => "Played",
            Self::Moved => "Moved",
        }
    }

    /// Single-glyph icon shown next to a session.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Lifted => "\u{25C6}",   // ◆
            Self::Walked => "\u{2197}",   // ↗
            Self::Ran => "\u{00BB}",      // »
            Self::Stretched => "~",
            Self::Played => "\u{25CB}",   // ○
            Self::Moved => "\u{223F}",    // ∿
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = RepsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| {
                RepsError::InvalidInput(format!(
                    "Unknown movement type \"{}\" (use lifted, walked, ran, stretched, played or moved)",
                    value
                ))
            })
    }
}

/// How a session felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Strong,
    Alive,
    Peaceful,
    Heavy,
    Grinding,
    Easy,
    Rough,
}

impl Feeling {
    pub const ALL: [Feeling; 7] = [
        Feeling::Strong,
        Feeling::Alive,
        Feeling::Peaceful,
        Feeling::Heavy,
        Feeling::Grinding,
        Feeling::Easy,
        Feeling::Rough,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Alive => "alive",
            Self::Peaceful => "peaceful",
            Self::Heavy => "heavy",
            Self::Grinding => "grinding",
            Self::Easy => "easy",
            Self::Rough => "rough",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Alive => "Alive",
            Self::Peaceful => "Peaceful",
            Self::Heavy => "Heavy",
            Self::Grinding => "Grinding",
            Self::Easy => "Easy",
            Self::Rough => "Rough",
        }
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feeling {
    type Err = RepsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == lowered)
            .ok_or_else(|| {
                RepsError::InvalidInput(format!(
                    "Unknown feeling \"{}\" (use strong, alive, peaceful, heavy, grinding, easy or rough)",
                    value
                ))
            })
    }
}

/// Exercise detail attached to a quick-logged session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A single logged instance of physical activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementSession {
    pub id: String,

    #[serde(rename = "type")]
    pub movement_type: MovementType,

    pub feeling: Feeling,

    pub label: String,

    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_details: Option<Vec<WorkoutExercise>>,
}
