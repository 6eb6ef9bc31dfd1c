//! Error types for moves and terminal access.

use super::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

const CLOSED: &str = "input stream closed";

/// A rejected move. Every variant is recoverable: the same player is asked
/// again for the same move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The input line was not an integer.
    #[display("Please enter a valid number")]
    InvalidInput(String),

    /// The position is outside 0-8.
    #[display("Enter a correct number (0-8)")]
    OutOfRange(i64),

    /// The square at the position is already occupied.
    #[display("Place is already taken, please enter another one")]
    CellTaken(Position),
}

impl std::error::Error for MoveError {}

/// Terminal I/O failure, including a closed input stream.
#[derive(Debug, Clone, Display, Error)]
#[display("Terminal error: {} at {}:{}", message, file, line)]
pub struct TerminalError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TerminalError {
    /// Creates a new terminal error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Input reached end of stream.
    #[track_caller]
    pub fn closed() -> Self {
        Self::new(CLOSED)
    }

    /// Whether this error only means input ran out.
    pub fn is_closed(&self) -> bool {
        self.message == CLOSED
    }
}

impl From<std::io::Error> for TerminalError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
