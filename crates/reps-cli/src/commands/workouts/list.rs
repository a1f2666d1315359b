use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_WORKOUT_LIMIT;
use crate::output::{print_json, workouts_json};
use crate::ui::{format_date, header, print, simple_table, Column};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let workouts = journal
        .workouts()
        .get_recent(args.limit.unwrap_or(DEFAULT_WORKOUT_LIMIT));

    if args.json {
        return print_json(&workouts_json(journal, &workouts)?);
    }
    if workouts.is_empty() {
        if !ctx.quiet() {
            println!("No workouts yet.");
        }
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false);
    let rows: Vec<Vec<String>> = workouts
        .iter()
        .map(|w| {
            vec![
                format_date(&w.date),
                journal.template_name_for(w),
                w.exercises.len().to_string(),
                w.id.clone(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "workouts", None));
    }
    let columns = [
        Column::new("DATE"),
        Column::new("TEMPLATE"),
        Column::new("EXERCISES"),
        Column::new("ID"),
    ];
    println!("{}", simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
