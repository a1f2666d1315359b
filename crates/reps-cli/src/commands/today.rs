use chrono::{Local, Timelike};

use reps_core::greeting::greeting;
use reps_core::stats::{presence_row, today, PRESENCE_DAYS};
use reps_core::weather::Weather;
use reps_core::Season;

use crate::app::AppContext;
use crate::cli::WeatherArgs;
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, hint, kv, presence_row as render_presence, print};

/// Current weather, served from the hour-long cache when possible.
pub async fn handle_weather(ctx: &AppContext<'_>, args: &WeatherArgs) -> anyhow::Result<()> {
    let weather = current_weather(ctx).await?;

    if args.json {
        return print_json(&weather);
    }

    let ui_ctx = ctx.ui_context(false);
    match weather {
        Some(w) => {
            print(
                &ui_ctx,
                &kv(&ui_ctx, "Temperature", &format!("{:.0}°F", w.temperature)),
            );
            print(&ui_ctx, &kv(&ui_ctx, "Condition", w.condition.label()));
        }
        None => {
            print(&ui_ctx, &kv(&ui_ctx, "Weather", "unavailable"));
            if ctx.config()?.weather.coordinates().is_none() && !ctx.quiet() {
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, "reps init --force --latitude <LAT> --longitude <LON>"),
                );
            }
        }
    }
    Ok(())
}

/// Greeting with weather (or the season prompt), then the last two weeks.
pub async fn handle_today(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let weather = current_weather(ctx).await?;
    let sessions = ctx.journal()?.sessions().get_all();
    let today = today();
    let row = presence_row(&sessions, today);
    let active_days = row.iter().filter(|&&here| here).count();

    let ui_ctx = ctx.ui_context(false);
    println!(
        "{}",
        styled(
            &greeting(Local::now().hour(), random_pick(), weather.as_ref()),
            styles::bold(),
            ui_ctx.color,
        )
    );
    if weather.is_none() {
        println!("{}", Season::for_date(today).prompt());
    }
    blank_line(&ui_ctx);
    print(
        &ui_ctx,
        &kv(
            &ui_ctx,
            "Last 14 days",
            &format!(
                "{}  {} of {}",
                render_presence(&ui_ctx, &row),
                active_days,
                PRESENCE_DAYS
            ),
        ),
    );
    Ok(())
}

async fn current_weather(ctx: &AppContext<'_>) -> anyhow::Result<Option<Weather>> {
    Ok(ctx.weather()?.current_weather().await)
}

/// Index for picking among greeting phrases.
fn random_pick() -> usize {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf) as usize,
        Err(_) => 0,
    }
}
