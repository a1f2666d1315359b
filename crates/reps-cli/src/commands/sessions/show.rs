use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::record_not_found;
use crate::output::print_json;
use crate::ui::{format_datetime, format_weight, kv, print};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let session = ctx
        .journal()?
        .sessions()
        .get_by_id(&args.id)
        .ok_or_else(|| record_not_found("Session", &args.id, "reps sessions list"))?;

    if args.json {
        return print_json(&session);
    }

    let ui_ctx = ctx.ui_context(false);
    let pretty = ui_ctx.mode.is_pretty();
    print(&ui_ctx, &kv(&ui_ctx, "ID", &session.id));
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Type",
            &format!("{} {}", session.movement_type.icon(), session.movement_type.label()),
        ),
    );
    print(&ui_ctx, &kv(&ui_ctx, "Label", &session.label));
    print(&ui_ctx, &kv(&ui_ctx, "Feeling", session.feeling.label()));
    print(&ui_ctx, &kv(&ui_ctx, "Date", &format_datetime(&session.date, pretty)));
    if let Some(ref note) = session.note {
        print(&ui_ctx, &kv(&ui_ctx, "Note", note));
    }
    for detail in session.workout_details.iter().flatten() {
        let mut line = detail.name.clone();
        if let (Some(sets), Some(reps)) = (detail.sets, detail.reps) {
            line.push_str(&format!(" {}x{}", sets, reps));
        } else if let Some(reps) = detail.reps {
            line.push_str(&format!(" {} reps", reps));
        } else if let Some(sets) = detail.sets {
            line.push_str(&format!(" {} sets", sets));
        }
        if let Some(weight) = detail.weight {
            line.push_str(&format!(" @ {}", format_weight(weight)));
        }
        print(&ui_ctx, &kv(&ui_ctx, "Exercise", &line));
    }
    Ok(())
}
