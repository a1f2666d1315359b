use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::record_not_found;
use crate::output::print_json;
use crate::ui::{kv, print};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let template = ctx
        .journal()?
        .templates()
        .get_by_id(&args.id)
        .ok_or_else(|| record_not_found("Template", &args.id, "reps templates list"))?;

    if args.json {
        return print_json(&template);
    }

    let ui_ctx = ctx.ui_context(false);
    print(&ui_ctx, &kv(&ui_ctx, "ID", &template.id));
    print(&ui_ctx, &kv(&ui_ctx, "Name", &template.name));
    if template.exercises.is_empty() {
        print(&ui_ctx, &kv(&ui_ctx, "Exercises", "none"));
    }
    for (i, exercise) in template.exercises.iter().enumerate() {
        print(
            &ui_ctx,
            &kv(&ui_ctx, &format!("Exercise {}", i + 1), &exercise.name),
        );
    }
    Ok(())
}
