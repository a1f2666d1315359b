//! Reps CLI - a seasonal movement journal for the terminal
//!
//! This is the command-line interface for Reps. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use reps_core::{RepsError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands, SessionsSubcommand, TemplatesSubcommand, WorkoutsSubcommand};
use crate::commands::{init, log, maintenance, misc, sessions, stats, templates, today, workouts};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::ui::print_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli).await {
        let ui_ctx = ctx.ui_context(false);

        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            print_error(&ui_ctx, cli_err.message(), cli_err.hint());
            std::process::exit(cli_err.exit_code());
        }

        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        let message = error_msg
            .split_once("\nHint:")
            .map_or(error_msg.as_str(), |(message, _)| message);
        print_error(&ui_ctx, message, hint.as_deref());

        let code = match e.downcast_ref::<RepsError>() {
            Some(RepsError::NotFound(_)) => exit_codes::NOT_FOUND,
            Some(RepsError::Validation(_)) | Some(RepsError::InvalidInput(_)) => {
                exit_codes::INVALID_INPUT
            }
            _ => 1,
        };
        std::process::exit(code);
    }
}

/// Provide contextual hints for common error messages.
fn extract_error_hint(error: &str) -> Option<String> {
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + 1..].to_string());
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("template") && error_lower.contains("not found") {
        return Some("Hint: Run `reps templates list` to see available templates.".to_string());
    }

    if error_lower.contains("weather error") {
        return Some("Hint: Check [weather] in config.toml or run with --verbose.".to_string());
    }

    if error_lower.contains("schema error") {
        return Some(
            "Hint: The data file was not changed. Check it, or use a newer reps build.".to_string(),
        );
    }

    if error_lower.contains("failed to parse config") {
        return Some("Hint: Fix the file or run `reps init --force` to rewrite it.".to_string());
    }

    None
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Log(args)) => {
            log::handle_log(ctx, args)?;
        }
        Some(Commands::Sessions(args)) => match &args.command {
            SessionsSubcommand::List(list_args) => {
                sessions::handle_list(ctx, list_args)?;
            }
            SessionsSubcommand::Show(show_args) => {
                sessions::handle_show(ctx, show_args)?;
            }
            SessionsSubcommand::Delete(delete_args) => {
                sessions::handle_delete(ctx, delete_args)?;
            }
        },
        Some(Commands::Templates(args)) => match &args.command {
            TemplatesSubcommand::Create(create_args) => {
                templates::handle_create(ctx, create_args)?;
            }
            TemplatesSubcommand::List(list_args) => {
                templates::handle_list(ctx, list_args)?;
            }
            TemplatesSubcommand::Show(show_args) => {
                templates::handle_show(ctx, show_args)?;
            }
            TemplatesSubcommand::Update(update_args) => {
                templates::handle_update(ctx, update_args)?;
            }
            TemplatesSubcommand::Delete(delete_args) => {
                templates::handle_delete(ctx, delete_args)?;
            }
        },
        Some(Commands::Workouts(args)) => match &args.command {
            WorkoutsSubcommand::Start(start_args) => {
                workouts::handle_start(ctx, start_args)?;
            }
            WorkoutsSubcommand::List(list_args) => {
                workouts::handle_list(ctx, list_args)?;
            }
            WorkoutsSubcommand::Show(show_args) => {
                workouts::handle_show(ctx, show_args)?;
            }
            WorkoutsSubcommand::Update(update_args) => {
                workouts::handle_update(ctx, update_args)?;
            }
            WorkoutsSubcommand::Delete(delete_args) => {
                workouts::handle_delete(ctx, delete_args)?;
            }
        },
        Some(Commands::Stats(args)) => {
            stats::handle_stats(ctx, args)?;
        }
        Some(Commands::Weather(args)) => {
            today::handle_weather(ctx, args).await?;
        }
        Some(Commands::Today) => {
            today::handle_today(ctx).await?;
        }
        Some(Commands::Reset(args)) => {
            maintenance::handle_reset(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Reps v{}", VERSION);
            println!("\nQuickstart:");
            println!("  reps init");
            println!("  reps log walked peaceful --note \"Around the reservoir\"");
            println!("  reps sessions list");
            println!("  reps stats");
            println!("  reps today");
            println!("\nRun `reps --help` for full usage.");
        }
    }

    Ok(())
}
