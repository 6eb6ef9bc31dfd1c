//! Pawns engine - two-player tic-tac-toe logic
//!
//! The engine places marks, validates target cells, detects wins and keeps
//! the turn counter. Console I/O is reached only through the [`Terminal`]
//! trait, so a whole game can be driven from memory.
//!
//! # Example
//!
//! ```
//! use pawns_engine::{run_game, Engine, Player, ScriptedTerminal, TurnOutcome};
//!
//! let mut terminal = ScriptedTerminal::new(["0", "3", "1", "4", "2", ""]);
//! let report = run_game(Engine::new(), &mut terminal).unwrap();
//! assert_eq!(*report.outcome(), TurnOutcome::Won(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod game;
mod history;
mod position;
mod terminal;
mod types;

pub use engine::{DEFAULT_MAX_ROUNDS, Engine, TurnOutcome};
pub use error::{MoveError, TerminalError};
pub use game::{GREETING, GameReport, NO_WINNER, run_game};
pub use history::{History, Snapshot};
pub use position::Position;
pub use terminal::{ScriptedTerminal, Terminal, Tone, parse_int};
pub use types::{Board, LINES, Player, Square};
