use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::record_not_found;
use crate::helpers::confirm;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let session = journal
        .sessions()
        .get_by_id(&args.id)
        .ok_or_else(|| record_not_found("Session", &args.id, "reps sessions list"))?;

    let ui_ctx = ctx.ui_context(false);
    if !confirm(&format!("Delete {} session {}?", session.label, session.id), args.force)? {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
            }
        }
        return Ok(());
    }

    if !journal.sessions().delete(&session.id)? {
        return Err(record_not_found("Session", &args.id, "reps sessions list").into());
    }

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Deleted session {}", session.id)),
            ),
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", session.id);
            }
        }
    }
    Ok(())
}
