use reps_core::records::NewSession;
use reps_core::storage::WorkoutExercise;

use crate::app::AppContext;
use crate::cli::LogArgs;
use crate::helpers::{parse_datetime, parse_exercise_specs, parse_feeling, parse_movement_type};
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, format_datetime, hint, print, Badge, OutputMode};

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let movement_type = parse_movement_type(&args.movement_type)?;
    let feeling = parse_feeling(&args.feeling)?;

    let mut new_session = NewSession::new(movement_type, feeling);
    if let Some(ref label) = args.label {
        new_session = new_session.with_label(label);
    }
    if let Some(ref note) = args.note {
        new_session = new_session.with_note(note);
    }
    if !args.exercise.is_empty() {
        let details: Vec<WorkoutExercise> = parse_exercise_specs(&args.exercise)?
            .into_iter()
            .map(WorkoutExercise::from)
            .collect();
        new_session = new_session.with_workout_details(details);
    }
    if let Some(ref value) = args.date {
        new_session = new_session.with_date(parse_datetime(value)?);
    }

    let session = ctx.journal()?.sessions().create(new_session)?;

    if args.json {
        return print_json(&session);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false);
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Logged {} {}", session.movement_type.icon(), session.label),
                ),
            );
            let context = format!(
                "Felt {}  \u{00B7}  {}  \u{00B7}  ID: {}",
                session.feeling.label().to_lowercase(),
                format_datetime(&session.date, true),
                session.id
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
            blank_line(&ui_ctx);
            print(&ui_ctx, &hint(&ui_ctx, "reps sessions list  \u{00B7}  reps stats"));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("session_id={}", session.id);
            println!("type={}", session.movement_type);
            println!("feeling={}", session.feeling);
            println!("date={}", format_datetime(&session.date, false));
        }
    }
    Ok(())
}
