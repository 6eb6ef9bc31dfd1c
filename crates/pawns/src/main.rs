//! Pawns - two-player console tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use pawns::{Cli, ConsoleTerminal, GameConfig, init_tracing};
use pawns_engine::{Engine, run_game};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    init_tracing(config.log_level(), cli.log_file.as_deref())?;

    run(&cli, &config)
}

#[instrument(skip_all, fields(max_rounds = config.max_rounds()))]
fn run(cli: &Cli, config: &GameConfig) -> Result<()> {
    info!("Starting game");

    let mut terminal = ConsoleTerminal::stdio(*config.color());
    let report = run_game(Engine::with_max_rounds(*config.max_rounds()), &mut terminal)?;

    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(report.history())?);
    }

    Ok(())
}
