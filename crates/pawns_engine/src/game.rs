//! A complete game from greeting to summary.

use super::engine::{Engine, TurnOutcome};
use super::error::TerminalError;
use super::history::History;
use super::terminal::{Terminal, Tone};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Printed when the game starts.
pub const GREETING: &str = "Hello, let's play tic-tac-toe!";

/// Printed when the round cap is reached without a winner.
pub const NO_WINNER: &str = "There was no winner in that game :/";

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameReport {
    /// Final outcome, never [`TurnOutcome::Continue`].
    outcome: TurnOutcome,
    /// One snapshot per round played.
    history: History,
}

/// Plays a full game on `terminal` and prints the summary.
///
/// The history is owned here: a snapshot is copied from the engine after
/// every round, including the one that ended the game.
///
/// # Errors
///
/// Returns a [`TerminalError`] if the terminal fails or input runs out.
#[instrument(skip_all, fields(max_rounds = engine.max_rounds()))]
pub fn run_game<T: Terminal + ?Sized>(
    mut engine: Engine,
    terminal: &mut T,
) -> Result<GameReport, TerminalError> {
    terminal.print(GREETING)?;

    let mut history = History::new();
    let outcome = loop {
        let outcome = engine.run_round(terminal)?;
        history.record(engine.snapshot());
        if outcome.is_over() {
            break outcome;
        }
    };

    match outcome {
        TurnOutcome::Won(player) => {
            terminal.print_toned(&format!("Player {} won !", player.number()), Tone::Success)?
        }
        _ => terminal.print_toned(NO_WINNER, Tone::Warning)?,
    }
    // Wait for Enter before the summary scrolls the board away. Running out
    // of input here counts as a keypress.
    match terminal.read_line() {
        Err(e) if e.is_closed() => debug!("Input closed before keypress"),
        other => {
            other?;
        }
    }

    terminal.print(&history.to_string())?;
    info!(?outcome, rounds = history.len(), "Game finished");

    Ok(GameReport { outcome, history })
}
