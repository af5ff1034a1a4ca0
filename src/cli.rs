//! Command-line interface for pointer_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pointer Tic-Tac-Toe - two players, one mouse
#[derive(Parser, Debug)]
#[command(name = "pointer_tictactoe")]
#[command(about = "Mouse-driven two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings shared by every command
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings overrides applied on top of the config file.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the player using X
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name of the player using O
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Surface width
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// Surface height
    #[arg(long, global = true)]
    pub height: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with the mouse
    Play,

    /// Feed pointer releases from JSON lines and print move reports
    Replay {
        /// File with one {"x": .., "y": ..} object per line, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        events: String,
    },
}
