use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::record_not_found;
use crate::helpers::confirm;
use crate::ui::{badge, format_date, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let workout = journal
        .workouts()
        .get_by_id(&args.id)
        .ok_or_else(|| record_not_found("Workout", &args.id, "reps workouts list"))?;

    let ui_ctx = ctx.ui_context(false);
    let prompt = format!(
        "Delete {} workout from {}?",
        journal.template_name_for(&workout),
        format_date(&workout.date)
    );
    if !confirm(&prompt, args.force)? {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
            }
        }
        return Ok(());
    }

    journal.workouts().delete(&workout.id)?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Deleted workout {}", workout.id)),
            ),
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", workout.id);
            }
        }
    }
    Ok(())
}
