//! The `Journal` facade: one handle over all record stores.

use std::path::Path;
use std::sync::Arc;

use crate::error::{RepsError, Result};
use crate::records::{NewWorkout, SessionStore, TemplateStore, WorkoutStore};
use crate::storage::{
    keys, Adapter, ExerciseInstance, FileStore, KeyValueStore, MemoryStore, WorkoutInstance,
};
use crate::weather::{LocationProvider, WeatherService, WeatherSource};

/// Label shown for a workout whose template is gone and which carries no snapshot.
pub const DELETED_TEMPLATE_LABEL: &str = "Deleted template";

/// Entry point to a user's data.
#[derive(Clone)]
pub struct Journal {
    adapter: Adapter,
    templates: TemplateStore,
    workouts: WorkoutStore,
    sessions: SessionStore,
}

impl Journal {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let adapter = Adapter::new(store);
        Self {
            templates: TemplateStore::new(adapter.clone()),
            workouts: WorkoutStore::new(adapter.clone()),
            sessions: SessionStore::new(adapter.clone()),
            adapter,
        }
    }

    /// Journal persisted under a data directory.
    pub fn open_dir(path: &Path) -> Result<Self> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    /// Journal that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn workouts(&self) -> &WorkoutStore {
        &self.workouts
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Start a workout from a template: one empty exercise row per template
    /// exercise, dated now, with the template name captured.
    ///
    /// # Errors
    ///
    /// Returns `RepsError::NotFound` if the template does not exist.
    pub fn start_workout(&self, template_id: &str) -> Result<WorkoutInstance> {
        let template = self
            .templates
            .get_by_id(template_id)
            .ok_or_else(|| RepsError::NotFound(format!("template {}", template_id)))?;

        let exercises = template
            .exercises
            .iter()
            .map(|exercise| ExerciseInstance::new(exercise.name.clone()))
            .collect();

        self.workouts
            .create(NewWorkout::new(&template.id, exercises).with_template_name(&template.name))
    }

    /// Display name for a workout's template.
    ///
    /// Prefers the live template, then the creation-time snapshot.
    pub fn template_name_for(&self, workout: &WorkoutInstance) -> String {
        self.templates
            .get_by_id(&workout.template_id)
            .map(|t| t.name)
            .or_else(|| workout.template_name.clone())
            .unwrap_or_else(|| DELETED_TEMPLATE_LABEL.to_string())
    }

    /// Weather lookup sharing this journal's store for its cache.
    pub fn weather<S: WeatherSource, L: LocationProvider>(
        &self,
        source: S,
        location: L,
    ) -> WeatherService<S, L> {
        WeatherService::new(self.adapter.clone(), source, location)
    }

    /// Remove every template, workout and session.
    pub fn clear_all(&self) -> Result<()> {
        for key in keys::RECORDS {
            self.adapter.remove(key)?;
        }
        tracing::info!("Cleared all records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{NewSession, TemplatePatch};
    use crate::storage::{Exercise, Feeling, MovementType};

    #[test]
    fn test_start_workout_prefills_and_snapshots() {
        let journal = Journal::in_memory();
        let template = journal
            .templates()
            .create("Pull", vec![Exercise::new("Row"), Exercise::new("Chin-up")])
            .unwrap();

        let workout = journal.start_workout(&template.id).unwrap();
        assert_eq!(workout.template_id, template.id);
        assert_eq!(workout.template_name.as_deref(), Some("Pull"));
        let names: Vec<_> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Row", "Chin-up"]);
        assert!(workout.exercises.iter().all(|e| e.sets.is_none()));
    }

    #[test]
    fn test_start_workout_unknown_template() {
        let journal = Journal::in_memory();
        let err = journal.start_workout("nope").unwrap_err();
        assert!(matches!(err, RepsError::NotFound(_)));
        assert!(journal.workouts().get_all().is_empty());
    }

    #[test]
    fn test_workout_survives_template_deletion() {
        let journal = Journal::in_memory();
        let template = journal.templates().create("Push", vec![]).unwrap();
        let workout = journal.start_workout(&template.id).unwrap();

        journal
            .templates()
            .update(&template.id, TemplatePatch::new().name("Push v2"))
            .unwrap();
        assert_eq!(journal.template_name_for(&workout), "Push v2");

        assert!(journal.templates().delete(&template.id).unwrap());
        let stored = journal.workouts().get_by_id(&workout.id).unwrap();
        assert_eq!(journal.template_name_for(&stored), "Push");

        let orphan = journal
            .workouts()
            .create(NewWorkout::new("gone", vec![]))
            .unwrap();
        assert_eq!(journal.template_name_for(&orphan), DELETED_TEMPLATE_LABEL);
    }

    #[test]
    fn test_clear_all_keeps_weather_cache() {
        let store = Arc::new(MemoryStore::new());
        let journal = Journal::new(store.clone());
        journal.templates().create("A", vec![]).unwrap();
        journal
            .sessions()
            .create(NewSession::new(MovementType::Ran, Feeling::Alive))
            .unwrap();
        store.set(keys::WEATHER_CACHE, "{}").unwrap();

        journal.clear_all().unwrap();

        assert!(journal.templates().get_all().is_empty());
        assert!(journal.sessions().get_all().is_empty());
        assert!(store.get(keys::WEATHER_CACHE).unwrap().is_some());
    }
}
