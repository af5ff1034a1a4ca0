//! Pointer Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use pointer_tictactoe::{Match, Settings, run_replay, tui};
use std::io::{self, BufReader};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            let settings = load_settings(cli.settings)?;
            tui::run_tui(&settings)
        }
        Command::Replay { events } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(io::stderr)
                .init();
            let settings = load_settings(cli.settings)?;
            replay(&settings, &events)
        }
    }
}

/// Reads the config file if given, then applies command-line overrides.
#[instrument(skip_all)]
fn load_settings(args: SettingsArgs) -> Result<Settings> {
    let base = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    Ok(base.with_overrides(args.player_x, args.player_o, args.width, args.height))
}

/// Runs the headless driver and prints the final announcement.
#[instrument(skip(settings))]
fn replay(settings: &Settings, events: &str) -> Result<()> {
    let mut game = Match::from_settings(settings)?;
    let stdout = io::stdout();

    if events == "-" {
        info!("Reading pointer releases from stdin");
        run_replay(&mut game, io::stdin().lock(), stdout.lock())?;
    } else {
        let file = std::fs::File::open(events)
            .with_context(|| format!("Failed to open events file {}", events))?;
        run_replay(&mut game, BufReader::new(file), stdout.lock())?;
    }

    if let Some(text) = game.announcement() {
        println!("{}", text);
    }
    Ok(())
}
