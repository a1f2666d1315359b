//! Workout instance store.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::records::{Dated, Patchable, Record, RecordStore};
use crate::storage::{keys, Adapter, ExerciseInstance, WorkoutInstance};

/// How many workouts the history view shows by default.
pub const DEFAULT_RECENT_WORKOUTS: usize = 10;

impl Record for WorkoutInstance {
    const KEY: &'static str = keys::WORKOUTS;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Dated for WorkoutInstance {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Builder for creating new workouts.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub template_id: String,
    pub template_name: Option<String>,
    pub exercises: Vec<ExerciseInstance>,
    /// Defaults to creation time
    pub date: Option<DateTime<Utc>>,
}

impl NewWorkout {
    pub fn new(template_id: impl Into<String>, exercises: Vec<ExerciseInstance>) -> Self {
        Self {
            template_id: template_id.into(),
            template_name: None,
            exercises,
            date: None,
        }
    }

    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// Partial update for a workout. The date is preserved unless set here.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPatch {
    pub template_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub exercises: Option<Vec<ExerciseInstance>>,
}

impl WorkoutPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn exercises(mut self, exercises: Vec<ExerciseInstance>) -> Self {
        self.exercises = Some(exercises);
        self
    }
}

impl Patchable for WorkoutInstance {
    type Patch = WorkoutPatch;

    fn apply(&mut self, patch: WorkoutPatch) -> Result<()> {
        if let Some(template_id) = patch.template_id {
            if template_id != self.template_id {
                // The old snapshot describes a different template.
                self.template_name = None;
            }
            self.template_id = template_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(exercises) = patch.exercises {
            self.exercises = exercises;
        }
        Ok(())
    }
}

/// CRUD over the workout collection.
#[derive(Clone)]
pub struct WorkoutStore {
    records: RecordStore<WorkoutInstance>,
}

impl WorkoutStore {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            records: RecordStore::new(adapter),
        }
    }

    pub fn create(&self, workout: NewWorkout) -> Result<WorkoutInstance> {
        let date = workout.date.unwrap_or_else(Utc::now);
        let created = self.records.insert_with(|id| WorkoutInstance {
            id,
            template_id: workout.template_id,
            template_name: workout.template_name,
            date,
            exercises: workout.exercises,
        })?;
        tracing::debug!(id = %created.id, template_id = %created.template_id, "Created workout");
        Ok(created)
    }

    pub fn get_by_id(&self, id: &str) -> Option<WorkoutInstance> {
        self.records.get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<WorkoutInstance> {
        self.records.get_all()
    }

    pub fn get_recent(&self, limit: usize) -> Vec<WorkoutInstance> {
        self.records.get_recent(limit)
    }

    pub fn update(&self, id: &str, patch: WorkoutPatch) -> Result<Option<WorkoutInstance>> {
        self.records.update(id, patch)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.records.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Duration;
    use std::sync::Arc;

    fn store() -> WorkoutStore {
        WorkoutStore::new(Adapter::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn test_update_preserves_date() {
        let workouts = store();
        let created = workouts
            .create(NewWorkout::new("t-1", vec![ExerciseInstance::new("Row")]))
            .unwrap();

        let mut logged = ExerciseInstance::new("Row");
        logged.sets = Some(3);
        logged.reps = Some(8);
        logged.tags = vec!["pr".to_string()];

        let updated = workouts
            .update(&created.id, WorkoutPatch::new().exercises(vec![logged.clone()]))
            .unwrap()
            .unwrap();

        assert_eq!(updated.date, created.date);
        assert_eq!(updated.exercises, vec![logged]);
    }

    #[test]
    fn test_changing_template_clears_snapshot() {
        let workouts = store();
        let created = workouts
            .create(NewWorkout::new("t-1", vec![]).with_template_name("Push"))
            .unwrap();

        let same = workouts
            .update(&created.id, WorkoutPatch::new().template_id("t-1"))
            .unwrap()
            .unwrap();
        assert_eq!(same.template_name.as_deref(), Some("Push"));

        let moved = workouts
            .update(&created.id, WorkoutPatch::new().template_id("t-2"))
            .unwrap()
            .unwrap();
        assert_eq!(moved.template_name, None);
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let workouts = store();
        let base = Utc::now();
        for offset in [3, 1, 4, 0, 2] {
            workouts
                .create(NewWorkout::new("t", vec![]).with_date(base - Duration::days(offset)))
                .unwrap();
        }

        let recent = workouts.get_recent(3);
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert_eq!(recent[0].date, base);
    }
}
