use reps_core::records::TemplatePatch;
use reps_core::storage::Exercise;

use crate::app::AppContext;
use crate::cli::TemplateUpdateArgs;
use crate::errors::{record_not_found, CliError};
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_update(ctx: &AppContext, args: &TemplateUpdateArgs) -> anyhow::Result<()> {
    let patch = build_patch(args)?;

    let template = ctx
        .journal()?
        .templates()
        .update(&args.id, patch)?
        .ok_or_else(|| record_not_found("Template", &args.id, "reps templates list"))?;

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
                            "Updated template '{}' ({} exercises)",
                            template.name,
                            template.exercises.len()
                        ),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("template_id={}", template.id);
                println!("name={}", template.name);
                println!("exercises={}", template.exercises.len());
            }
        }
    }
    Ok(())
}

fn build_patch(args: &TemplateUpdateArgs) -> anyhow::Result<TemplatePatch> {
    let mut patch = TemplatePatch::new();
    let mut changed = false;
    if let Some(ref name) = args.name {
        patch = patch.name(name);
        changed = true;
    }
    if args.clear_exercises {
        patch = patch.exercises(Vec::new());
        changed = true;
    } else if !args.exercise.is_empty() {
        patch = patch.exercises(args.exercise.iter().map(Exercise::new).collect());
        changed = true;
    }
    if !changed {
        return Err(CliError::invalid_input(
            "Nothing to update (use --name, --exercise or --clear-exercises)",
        )
        .into());
    }
    Ok(patch)
}
