//! Movement session store.
//!
//! Sessions are immutable once logged; the only mutation is delete.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::records::{Dated, Record, RecordStore};
use crate::storage::{keys, Adapter, Feeling, MovementSession, MovementType, WorkoutExercise};

/// Size of the home screen's recent list (two weeks of daily sessions).
pub const DEFAULT_RECENT_SESSIONS: usize = 14;

impl Record for MovementSession {
    const KEY: &'static str = keys::MOVEMENT_SESSIONS;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Dated for MovementSession {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Builder for logging a session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub movement_type: MovementType,
    pub feeling: Feeling,
    pub label: Option<String>,
    pub note: Option<String>,
    pub workout_details: Vec<WorkoutExercise>,
    /// Defaults to creation time; set when back-filling
    pub date: Option<DateTime<Utc>>,
}

impl NewSession {
    pub fn new(movement_type: MovementType, feeling: Feeling) -> Self {
        Self {
            movement_type,
            feeling,
            label: None,
            note: None,
            workout_details: Vec::new(),
            date: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_workout_details(mut self, details: Vec<WorkoutExercise>) -> Self {
        self.workout_details = details;
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    fn into_session(self, id: String, now: DateTime<Utc>) -> MovementSession {
        let label = self
            .label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.movement_type.label().to_string());
        let note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let details: Vec<WorkoutExercise> = self
            .workout_details
            .into_iter()
            .filter(|d| !d.name.trim().is_empty())
            .collect();

        MovementSession {
            id,
            movement_type: self.movement_type,
            feeling: self.feeling,
            label,
            date: self.date.unwrap_or(now),
            note,
            workout_details: (!details.is_empty()).then_some(details),
        }
    }
}

/// Create/read/delete over the session collection.
#[derive(Clone)]
pub struct SessionStore {
    records: RecordStore<MovementSession>,
}

impl SessionStore {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            records: RecordStore::new(adapter),
        }
    }

    pub fn create(&self, session: NewSession) -> Result<MovementSession> {
        let now = Utc::now();
        let created = self
            .records
            .insert_with(|id| session.into_session(id, now))?;
        tracing::debug!(id = %created.id, kind = %created.movement_type, "Logged session");
        Ok(created)
    }

    pub fn get_by_id(&self, id: &str) -> Option<MovementSession> {
        self.records.get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<MovementSession> {
        self.records.get_all()
    }

    pub fn get_recent(&self, limit: usize) -> Vec<MovementSession> {
        self.records.get_recent(limit)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.records.delete(id)
    }
}
