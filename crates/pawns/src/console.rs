//! Console terminal over any reader and writer, coloured with crossterm.

use crossterm::style::Stylize;
use pawns_engine::{Terminal, TerminalError, Tone};
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use tracing::trace;

/// Line-oriented terminal writing styled text.
#[derive(Debug)]
pub struct ConsoleTerminal<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl ConsoleTerminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's stdin and stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    /// Creates a terminal reading lines from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W, color: bool) -> Self {
        Self {
            reader,
            writer,
            color,
        }
    }

    /// Consumes the terminal, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn write(&mut self, text: &str, tone: Tone) -> Result<(), TerminalError> {
        match (self.color, tone) {
            (false, _) | (_, Tone::Plain) => write!(self.writer, "{}", text)?,
            (true, Tone::Error) => write!(self.writer, "{}", text.red())?,
            (true, Tone::Success) => write!(self.writer, "{}", text.green())?,
            (true, Tone::Warning) => write!(self.writer, "{}", text.yellow())?,
        }
        // Prompts have no newline, so flush every write.
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(TerminalError::closed());
        }
        // Undecodable bytes stay in the line so it parses as invalid input.
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        trace!(line = %line, "Read input line");
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str, color: bool) -> ConsoleTerminal<&[u8], Vec<u8>> {
        ConsoleTerminal::new(input.as_bytes(), Vec::new(), color)
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut term = terminal("3\r\n4\n", false);
        assert_eq!(term.read_line().unwrap(), "3");
        assert_eq!(term.read_line().unwrap(), "4");
        assert!(term.read_line().is_err());
    }

    #[test]
    fn test_plain_when_color_disabled() {
        let mut term = terminal("", false);
        term.print_toned("Player 1 won !", Tone::Success).unwrap();
        let out = String::from_utf8(term.into_writer()).unwrap();
        assert_eq!(out, "Player 1 won !\n");
    }

    #[test]
    fn test_tones_are_coloured() {
        let mut term = terminal("", true);
        term.print_toned("bad", Tone::Error).unwrap();
        term.print("board").unwrap();
        let out = String::from_utf8(term.into_writer()).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("bad"));
        assert!(out.ends_with("board\n"));
    }

    #[test]
    fn test_non_utf8_line_is_not_a_number() {
        let mut term = ConsoleTerminal::new(&b"\xff\xfe\n5\n"[..], Vec::new(), false);
        assert!(matches!(
            term.read_int().unwrap(),
            Err(pawns_engine::MoveError::InvalidInput(_))
        ));
        assert_eq!(term.read_int().unwrap(), Ok(5));
    }

    #[test]
    fn test_read_int_on_console() {
        let mut term = terminal("seven\n7\n", false);
        assert!(term.read_int().unwrap().is_err());
        assert_eq!(term.read_int().unwrap(), Ok(7));
    }
}
