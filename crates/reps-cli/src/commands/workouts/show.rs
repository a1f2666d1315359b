use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::record_not_found;
use crate::output::{print_json, workout_json};
use crate::ui::{format_datetime, kv, print};

use super::describe_exercise;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let workout = journal
        .workouts()
        .get_by_id(&args.id)
        .ok_or_else(|| record_not_found("Workout", &args.id, "reps workouts list"))?;

    if args.json {
        return print_json(&workout_json(journal, &workout)?);
    }

    let ui_ctx = ctx.ui_context(false);
    print(&ui_ctx, &kv(&ui_ctx, "ID", &workout.id));
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Template", &journal.template_name_for(&workout)),
    );
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Date",
            &format_datetime(&workout.date, ui_ctx.mode.is_pretty()),
        ),
    );
    for exercise in &workout.exercises {
        print(&ui_ctx, &kv(&ui_ctx, "Exercise", &describe_exercise(exercise)));
        if let Some(ref notes) = exercise.notes {
            print(&ui_ctx, &kv(&ui_ctx, "Notes", notes));
        }
    }
    Ok(())
}
