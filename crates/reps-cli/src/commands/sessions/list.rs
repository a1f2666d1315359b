use reps_core::stats::{day_label, days_ago, today};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_SESSION_LIMIT;
use crate::output::print_json;
use crate::ui::{format_datetime, header, print, simple_table, truncate, Column};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let journal = ctx.journal()?;
    let sessions = journal
        .sessions()
        .get_recent(args.limit.unwrap_or(DEFAULT_SESSION_LIMIT));

    if args.json {
        return print_json(&sessions);
    }

    let ui_ctx = ctx.ui_context(false);
    if sessions.is_empty() {
        if !ctx.quiet() {
            println!("No sessions yet.");
        }
        return Ok(());
    }

    let today = today();
    let pretty = ui_ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = sessions
        .iter()
        .map(|s| {
            if pretty {
                vec![
                    day_label(days_ago(s.date, today)),
                    format!("{} {}", s.movement_type.icon(), s.label),
                    s.feeling.label().to_string(),
                    truncate(s.note.as_deref().unwrap_or(""), 40),
                    s.id.clone(),
                ]
            } else {
                vec![
                    s.id.clone(),
                    format_datetime(&s.date, false),
                    s.movement_type.to_string(),
                    s.feeling.to_string(),
                    s.label.clone(),
                ]
            }
        })
        .collect();

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "sessions", None));
    }
    let columns = [
        Column::new("WHEN"),
        Column::new("MOVEMENT"),
        Column::new("FELT"),
        Column::new("NOTE"),
        Column::new("ID"),
    ];
    println!("{}", simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
