//! JSON output formatting for records.

use serde::Serialize;

use reps_core::storage::WorkoutInstance;
use reps_core::Journal;

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Convert a workout to JSON with its display template name resolved.
pub fn workout_json(journal: &Journal, workout: &WorkoutInstance) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(workout)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "templateName".to_string(),
            serde_json::Value::String(journal.template_name_for(workout)),
        );
    }
    Ok(value)
}

/// Convert multiple workouts to a JSON array for output.
pub fn workouts_json(
    journal: &Journal,
    workouts: &[WorkoutInstance],
) -> anyhow::Result<Vec<serde_json::Value>> {
    workouts
        .iter()
        .map(|workout| workout_json(journal, workout))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reps_core::records::NewWorkout;
    use reps_core::storage::Exercise;

    #[test]
    fn test_workout_json_resolves_deleted_template() {
        let journal = Journal::in_memory();
        let template = journal
            .templates()
            .create("Push", vec![Exercise::new("Bench")])
            .expect("create");
        let kept = journal.start_workout(&template.id).expect("start");
        let orphan = journal
            .workouts()
            .create(NewWorkout::new("gone", vec![]))
            .expect("create");

        let kept_json = workout_json(&journal, &kept).expect("json");
        assert_eq!(kept_json["templateName"], "Push");
        assert_eq!(kept_json["templateId"], template.id.as_str());

        let orphan_json = workout_json(&journal, &orphan).expect("json");
        assert_eq!(orphan_json["templateName"], "Deleted template");
    }
}
