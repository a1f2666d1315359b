use crate::app::AppContext;
use crate::cli::TemplateListArgs;
use crate::output::print_json;
use crate::ui::{header, print, simple_table, truncate, Column};

pub fn handle_list(ctx: &AppContext, args: &TemplateListArgs) -> anyhow::Result<()> {
    let templates = ctx.journal()?.templates().get_all();

    if args.json {
        return print_json(&templates);
    }
    if templates.is_empty() {
        if !ctx.quiet() {
            println!("No templates found.");
        }
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false);
    let rows: Vec<Vec<String>> = templates
        .iter()
        .map(|t| {
            let names: Vec<&str> = t.exercises.iter().map(|e| e.name.as_str()).collect();
            vec![
                t.id.clone(),
                t.name.clone(),
                truncate(&names.join(", "), 48),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "templates", None));
    }
    let columns = [Column::new("ID"), Column::new("NAME"), Column::new("EXERCISES")];
    println!("{}", simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
