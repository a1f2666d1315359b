use crate::app::AppContext;
use crate::cli::WorkoutStartArgs;
use crate::errors::record_not_found;
use crate::output::{print_json, workout_json};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_start(ctx: &AppContext, args: &WorkoutStartArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    if journal.templates().get_by_id(&args.template_id).is_none() {
        return Err(record_not_found("Template", &args.template_id, "reps templates list").into());
    }

    let workout = journal.start_workout(&args.template_id)?;

    if args.json {
        return print_json(&workout_json(journal, &workout)?);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false);
    let template_name = journal.template_name_for(&workout);
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Started {}", template_name)),
            );
            let context = format!(
                "ID: {}  \u{00B7}  {} exercises",
                workout.id,
                workout.exercises.len()
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    &format!("reps workouts update {} --exercise 'Bench:3:8:135'", workout.id),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("workout_id={}", workout.id);
            println!("template_id={}", workout.template_id);
            println!("exercises={}", workout.exercises.len());
        }
    }
    Ok(())
}
