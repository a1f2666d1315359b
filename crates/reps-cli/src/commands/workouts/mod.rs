pub mod delete;
pub mod list;
pub mod show;
pub mod start;
pub mod update;

pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
pub use start::handle_start;
pub use update::handle_update;

use reps_core::storage::ExerciseInstance;

use crate::ui::format_weight;

/// "Bench 3x8 @ 135" style summary of a logged row.
pub(crate) fn describe_exercise(exercise: &ExerciseInstance) -> String {
    let mut line = exercise.name.clone();
    match (exercise.sets, exercise.reps) {
        (Some(sets), Some(reps)) => line.push_str(&format!(" {}x{}", sets, reps)),
        (Some(sets), None) => line.push_str(&format!(" {} sets", sets)),
        (None, Some(reps)) => line.push_str(&format!(" {} reps", reps)),
        (None, None) => {}
    }
    if let Some(weight) = exercise.weight {
        line.push_str(&format!(" @ {}", format_weight(weight)));
    }
    if !exercise.tags.is_empty() {
        line.push_str(&format!(" [{}]", exercise.tags.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_exercise() {
        let mut row = ExerciseInstance::new("Bench");
        assert_eq!(describe_exercise(&row), "Bench");

        row.sets = Some(3);
        row.reps = Some(8);
        row.weight = Some(135.0);
        assert_eq!(describe_exercise(&row), "Bench 3x8 @ 135");

        row.tags = vec!["paused".to_string()];
        assert_eq!(describe_exercise(&row), "Bench 3x8 @ 135 [paused]");
    }
}
