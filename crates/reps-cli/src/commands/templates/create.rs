use reps_core::storage::Exercise;

use crate::app::AppContext;
use crate::cli::TemplateCreateArgs;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_create(ctx: &AppContext, args: &TemplateCreateArgs) -> anyhow::Result<()> {
    let exercises = args.exercise.iter().map(Exercise::new).collect();
    let template = ctx.journal()?.templates().create(&args.name, exercises)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);

        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Created template"));
                let context = format!(
                    "Name: {}  \u{00B7}  ID: {}  \u{00B7}  {} exercises",
                    template.name,
                    template.id,
                    template.exercises.len()
                );
                println!("{}", styled(&context, styles::dim(), ui_ctx.color));
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, &format!("reps workouts start {}", template.id)),
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
