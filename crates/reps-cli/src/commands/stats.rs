use chrono::NaiveDate;
use serde::Serialize;

use reps_core::stats::{presence_row, sessions_in_season, today, SeasonSummary, PRESENCE_DAYS};
use reps_core::{season_day, Season, SeasonDay};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, header, kv, presence_row as render_presence, print};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    today: NaiveDate,
    season_day: Option<SeasonDay>,
    presence: [bool; PRESENCE_DAYS],
    summary: SeasonSummary,
}

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let sessions = ctx.journal()?.sessions().get_all();
    let today = today();
    let season = Season::for_date(today);

    let report = StatsReport {
        today,
        season_day: season_day(today),
        presence: presence_row(&sessions, today),
        summary: SeasonSummary::compute(season, &sessions_in_season(&sessions, today)),
    };

    if args.json {
        return print_json(&report);
    }

    let ui_ctx = ctx.ui_context(false);
    let summary = &report.summary;
    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "stats", Some(season.name())));
        if ui_ctx.mode.is_pretty() {
            println!("{}", styled(season.philosophy(), styles::dim(), ui_ctx.color));
            blank_line(&ui_ctx);
        }
    }

    if let Some(day) = report.season_day {
        print(
            &ui_ctx,
            &kv(
                &ui_ctx,
                "Season day",
                &format!("{} of {}", day.current_day, day.total_days),
            ),
        );
    }
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Last 14 days", &render_presence(&ui_ctx, &report.presence)),
    );
    print(
        &ui_ctx,
        &kv(&ui_ctx, "Sessions", &summary.total_sessions.to_string()),
    );
    if let Some((kind, count)) = summary.most_common_type {
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Most common", &format!("{} ({})", kind.label(), count)),
        );
    }
    if let Some((feeling, count)) = summary.most_common_feeling {
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Most felt", &format!("{} ({})", feeling.label(), count)),
        );
    }
    if let Some(streak) = summary.longest_streak {
        print(
            &ui_ctx,
            &kv(&ui_ctx, "Longest streak", &format!("{} days", streak)),
        );
    }
    Ok(())
}
