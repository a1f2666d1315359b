use reps_core::records::WorkoutPatch;
use reps_core::storage::ExerciseInstance;

use crate::app::AppContext;
use crate::cli::WorkoutUpdateArgs;
use crate::errors::{record_not_found, CliError};
use crate::helpers::{parse_datetime, parse_exercise_assignment, parse_exercise_specs};
use crate::ui::{badge, format_datetime, print, Badge, OutputMode};

pub fn handle_update(ctx: &AppContext, args: &WorkoutUpdateArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;

    let mut patch = WorkoutPatch::new();
    let mut changed = false;
    if let Some(ref value) = args.date {
        patch = patch.date(parse_datetime(value)?);
        changed = true;
    }
    if let Some(ref template_id) = args.template {
        if journal.templates().get_by_id(template_id).is_none() {
            return Err(record_not_found("Template", template_id, "reps templates list").into());
        }
        patch = patch.template_id(template_id);
        changed = true;
    }

    let touches_rows = !args.exercise.is_empty()
        || !args.tag.is_empty()
        || !args.untag.is_empty()
        || !args.note.is_empty();
    if touches_rows {
        let current = journal
            .workouts()
            .get_by_id(&args.id)
            .ok_or_else(|| record_not_found("Workout", &args.id, "reps workouts list"))?;
        patch = patch.exercises(edit_rows(current.exercises, args)?);
        changed = true;
    }

    if !changed {
        return Err(CliError::invalid_input(
            "Nothing to update (use --date, --template, --exercise, --tag, --untag or --note)",
        )
        .into());
    }

    let workout = journal
        .workouts()
        .update(&args.id, patch)?
        .ok_or_else(|| record_not_found("Workout", &args.id, "reps workouts list"))?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!(
                            "Updated {} ({})",
                            journal.template_name_for(&workout),
                            format_datetime(&workout.date, true)
                        ),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("workout_id={}", workout.id);
                println!("date={}", format_datetime(&workout.date, false));
                println!("exercises={}", workout.exercises.len());
            }
        }
    }
    Ok(())
}

/// Apply `--exercise`, `--tag`, `--untag` and `--note` to the stored rows.
fn edit_rows(
    current: Vec<ExerciseInstance>,
    args: &WorkoutUpdateArgs,
) -> anyhow::Result<Vec<ExerciseInstance>> {
    let mut rows = if args.exercise.is_empty() {
        current
    } else {
        replace_rows(current, &args.exercise)?
    };

    for value in &args.tag {
        let (name, tag) = parse_exercise_assignment(value, "tag")?;
        if tag.is_empty() {
            return Err(CliError::invalid_input(format!("Tag is empty: {}", value)).into());
        }
        let row = find_row(&mut rows, &name)?;
        if !row.tags.contains(&tag) {
            row.tags.push(tag);
        }
    }
    for value in &args.untag {
        let (name, tag) = parse_exercise_assignment(value, "untag")?;
        find_row(&mut rows, &name)?.tags.retain(|existing| existing != &tag);
    }
    for value in &args.note {
        let (name, text) = parse_exercise_assignment(value, "note")?;
        find_row(&mut rows, &name)?.notes = Some(text).filter(|text| !text.is_empty());
    }
    Ok(rows)
}

/// Rows rebuilt from specs. A spec naming an existing row keeps its tags
/// and notes; each existing row is matched at most once.
fn replace_rows(
    mut current: Vec<ExerciseInstance>,
    specs: &[String],
) -> anyhow::Result<Vec<ExerciseInstance>> {
    let mut rows = Vec::with_capacity(specs.len());
    for spec in parse_exercise_specs(specs)? {
        let previous = current
            .iter()
            .position(|row| row.name.eq_ignore_ascii_case(&spec.name))
            .map(|index| current.remove(index));
        let mut row = ExerciseInstance::from(spec);
        if let Some(previous) = previous {
            row.tags = previous.tags;
            row.notes = previous.notes;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn find_row<'a>(
    rows: &'a mut [ExerciseInstance],
    name: &str,
) -> anyhow::Result<&'a mut ExerciseInstance> {
    rows.iter_mut()
        .find(|row| row.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            CliError::invalid_input(format!("Workout has no exercise named \"{}\"", name)).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, tags: &[&str], notes: Option<&str>) -> ExerciseInstance {
        let mut row = ExerciseInstance::new(name);
        row.tags = tags.iter().map(|tag| tag.to_string()).collect();
        row.notes = notes.map(str::to_string);
        row
    }

    #[test]
    fn test_replaced_rows_keep_tags_and_notes_by_name() {
        let current = vec![
            row("Bench", &["Heavy"], Some("elbows in")),
            row("Row", &["Skip"], None),
        ];
        let rows = replace_rows(
            current,
            &["bench:5:5:185".to_string(), "Curl:3:12".to_string()],
        )
        .expect("replace");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "bench");
        assert_eq!(rows[0].sets, Some(5));
        assert_eq!(rows[0].tags, vec!["Heavy".to_string()]);
        assert_eq!(rows[0].notes.as_deref(), Some("elbows in"));
        assert!(rows[1].tags.is_empty());
    }

    #[test]
    fn test_find_row_unknown_name_is_invalid_input() {
        let mut rows = vec![row("Bench", &[], None)];
        let err = find_row(&mut rows, "Squat").expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }
}
