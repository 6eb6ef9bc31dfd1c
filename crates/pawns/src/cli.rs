//! Command-line interface for pawns.

use clap::Parser;
use std::path::PathBuf;

/// Pawns - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pawns")]
#[command(about = "Two-player tic-tac-toe played at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rounds played before the game is declared a draw (1-5)
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Disable coloured messages
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Also print the game summary as JSON
    #[arg(long)]
    pub summary_json: bool,
}
