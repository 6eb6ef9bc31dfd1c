//! Terminal I/O capability used by the game loop.
//!
//! The engine never touches stdin or stdout directly. It asks a [`Terminal`]
//! to print text and to read lines, which lets the console binary supply a
//! coloured stdio implementation and tests supply [`ScriptedTerminal`].

use super::error::{MoveError, TerminalError};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Board renderings, prompts and the summary.
    #[default]
    Plain,
    /// Rejected input.
    Error,
    /// A player won.
    Success,
    /// The game ended without a winner.
    Warning,
}

/// Prompting and display capability for the game loop.
pub trait Terminal {
    /// Writes `text` verbatim, without adding a newline.
    fn write(&mut self, text: &str, tone: Tone) -> Result<(), TerminalError>;

    /// Reads one raw line, without its line terminator.
    ///
    /// Returns [`TerminalError::closed`] once input is exhausted.
    fn read_line(&mut self) -> Result<String, TerminalError>;

    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str) -> Result<(), TerminalError> {
        self.print_toned(text, Tone::Plain)
    }

    /// Writes `text` followed by a newline using the given tone.
    fn print_toned(&mut self, text: &str, tone: Tone) -> Result<(), TerminalError> {
        self.write(text, tone)?;
        self.write("\n", Tone::Plain)
    }

    /// Shows `text` and returns the raw line typed in response.
    fn prompt(&mut self, text: &str) -> Result<String, TerminalError> {
        self.write(text, Tone::Plain)?;
        self.read_line()
    }

    /// Reads one line and parses it as an integer.
    ///
    /// The outer result carries terminal failures, the inner one
    /// [`MoveError::InvalidInput`] for a line that is not a number.
    fn read_int(&mut self) -> Result<Result<i64, MoveError>, TerminalError> {
        let line = self.read_line()?;
        Ok(parse_int(&line))
    }
}

/// Parses a typed move, ignoring surrounding whitespace.
#[instrument]
pub fn parse_int(line: &str) -> Result<i64, MoveError> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| MoveError::InvalidInput(line.to_string()))
}

/// In-memory terminal fed from a fixed list of input lines.
///
/// Everything written is captured and can be inspected with
/// [`ScriptedTerminal::output`] or, tone by tone, with
/// [`ScriptedTerminal::messages`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: String,
    messages: Vec<(Tone, String)>,
}

impl ScriptedTerminal {
    /// Creates a terminal that will answer reads with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Non-empty writes with their tone, in order.
    pub fn messages(&self) -> &[(Tone, String)] {
        &self.messages
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn write(&mut self, text: &str, tone: Tone) -> Result<(), TerminalError> {
        self.output.push_str(text);
        if !text.trim().is_empty() {
            self.messages.push((tone, text.to_string()));
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let line = self.input.pop_front().ok_or_else(TerminalError::closed)?;
        trace!(line = %line, "Scripted input");
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }
}
