//! Command-line interface for the rewind terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel, in the terminal
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Display name of the player with X
    #[arg(long)]
    pub player_one: Option<String>,

    /// Display name of the player with O
    #[arg(long)]
    pub player_two: Option<String>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
