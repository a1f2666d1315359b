use crate::app::AppContext;
use crate::cli::ResetArgs;
use crate::helpers::confirm;
use crate::ui::{badge, print, Badge, OutputMode};

/// Delete every template, workout and session. The weather cache is kept.
pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let ui_ctx = ctx.ui_context(false);

    if !confirm(
        "Delete all templates, workouts and sessions? This cannot be undone.",
        args.force,
    )? {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
            }
        }
        return Ok(());
    }

    journal.clear_all()?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Cleared all records"));
            }
            OutputMode::Plain | OutputMode::Json => println!("status=ok"),
        }
    }
    Ok(())
}
