use reps_core::weather::Coordinates;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, RepsConfig};
use crate::errors::CliError;
use crate::ui::{badge, blank_line, hint, kv, print, Badge, OutputMode};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (pass --force to overwrite it)",
            config_path.display()
        ))
        .into());
    }

    let coordinates = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => {
            validate_coordinates(latitude, longitude)?;
            Some(Coordinates {
                latitude,
                longitude,
            })
        }
        _ => None,
    };

    // Only an explicit data dir is pinned in the config.
    let config = RepsConfig::new(ctx.cli_data_dir(), coordinates);
    write_config(&config_path, &config)?;

    // Opening creates the data directory.
    ctx.journal()?;
    let data_dir = ctx.data_dir()?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let weather = match coordinates {
            Some(c) => format!("on ({}, {})", c.latitude, c.longitude),
            None => "off".to_string(),
        };
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Initialized reps"));
                print(&ui_ctx, &kv(&ui_ctx, "Config", &config_path.display().to_string()));
                print(&ui_ctx, &kv(&ui_ctx, "Data", &data_dir.display().to_string()));
                print(&ui_ctx, &kv(&ui_ctx, "Weather", &weather));
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, "reps log walked peaceful  \u{00B7}  reps today"),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("config={}", config_path.display());
                println!("data_dir={}", data_dir.display());
                println!("weather={}", if coordinates.is_some() { "on" } else { "off" });
            }
        }
    }
    Ok(())
}

fn validate_coordinates(latitude: f64, longitude: f64) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CliError::invalid_input(format!(
            "Latitude must be between -90 and 90: {}",
            latitude
        ))
        .into());
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CliError::invalid_input(format!(
            "Longitude must be between -180 and 180: {}",
            longitude
        ))
        .into());
    }
    Ok(())
}
