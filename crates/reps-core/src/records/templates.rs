//! Template store.

use crate::error::{RepsError, Result};
use crate::records::{Patchable, Record, RecordStore};
use crate::storage::{keys, Adapter, Exercise, Template};

impl Record for Template {
    const KEY: &'static str = keys::TEMPLATES;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for a template. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub exercises: Option<Vec<Exercise>>,
}

impl TemplatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = Some(exercises);
        self
    }
}

impl Patchable for Template {
    type Patch = TemplatePatch;

    fn apply(&mut self, patch: TemplatePatch) -> Result<()> {
        if let Some(name) = patch.name {
            self.name = normalize_name(&name)?;
        }
        if let Some(exercises) = patch.exercises {
            self.exercises = normalize_exercises(exercises);
        }
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RepsError::Validation(
            "Template name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim exercise names and drop blank rows.
fn normalize_exercises(exercises: Vec<Exercise>) -> Vec<Exercise> {
    exercises
        .into_iter()
        .filter_map(|exercise| {
            let name = exercise.name.trim();
            (!name.is_empty()).then(|| Exercise::new(name))
        })
        .collect()
}

/// CRUD over the template collection.
#[derive(Clone)]
pub struct TemplateStore {
    records: RecordStore<Template>,
}

impl TemplateStore {
    pub fn new(adapter: Adapter) -> Self {
        Self {
            records: RecordStore::new(adapter),
        }
    }

    /// Create a template.
    ///
    /// # Errors
    ///
    /// Returns `RepsError::Validation` if the name is blank, or
    /// `RepsError::Storage` if the collection cannot be written.
    pub fn create(&self, name: &str, exercises: Vec<Exercise>) -> Result<Template> {
        let name = normalize_name(name)?;
        let exercises = normalize_exercises(exercises);
        let template = self.records.insert_with(|id| Template {
            id,
            name,
            exercises,
        })?;
        tracing::debug!(id = %template.id, "Created template");
        Ok(template)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Template> {
        self.records.get_by_id(id)
    }

    pub fn get_all(&self) -> Vec<Template> {
        self.records.get_all()
    }

    pub fn update(&self, id: &str, patch: TemplatePatch) -> Result<Option<Template>> {
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
    use std::sync::Arc;

    fn store() -> TemplateStore {
        TemplateStore::new(Adapter::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn test_create_trims_and_drops_blank_exercises() {
        let templates = store();
        let created = templates
            .create(
                "  Push day ",
                vec![Exercise::new(" Bench "), Exercise::new("   "), Exercise::new("Dips")],
            )
            .unwrap();

        assert_eq!(created.name, "Push day");
        assert_eq!(
            created.exercises,
            vec![Exercise::new("Bench"), Exercise::new("Dips")]
        );
        assert_eq!(templates.get_by_id(&created.id), Some(created));
    }

    #[test]
    fn test_blank_name_rejected() {
        let templates = store();
        let err = templates.create("  ", vec![]).unwrap_err();
        assert!(matches!(err, RepsError::Validation(_)));
        assert!(templates.get_all().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let templates = store();
        let created = templates
            .create("Legs", vec![Exercise::new("Squat")])
            .unwrap();

        let updated = templates
            .update(&created.id, TemplatePatch::new().name("Leg day"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Leg day");
        assert_eq!(updated.exercises, created.exercises);
    }

    #[test]
    fn test_update_with_blank_name_leaves_collection_unchanged() {
        let templates = store();
        let created = templates.create("Legs", vec![]).unwrap();

        assert!(templates
            .update(&created.id, TemplatePatch::new().name(""))
            .is_err());
        assert_eq!(templates.get_all(), vec![created]);
    }
}
