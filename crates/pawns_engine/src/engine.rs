//! Turn resolution for a hot-seat game.
//!
//! The [`Engine`] owns the single mutable board and the turn counter. A round
//! is one move by each player; the counter advances once at the start of the
//! round, so both moves share its number.

use super::error::{MoveError, TerminalError};
use super::history::Snapshot;
use super::position::Position;
use super::terminal::{Terminal, Tone, parse_int};
use super::types::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Default number of rounds before the game is declared a draw.
///
/// Player 1 has placed five marks and player 2 four when it is reached, so
/// the board is full.
pub const DEFAULT_MAX_ROUNDS: u32 = 5;

/// No line can be complete before a player's third mark.
const FIRST_WINNING_TURN: u32 = 3;

/// Result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// Neither player won and the cap was not reached.
    Continue,
    /// The player completed a line.
    Won(Player),
    /// The round cap was reached, or the board filled, with no winner.
    Draw,
}

impl TurnOutcome {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != TurnOutcome::Continue
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    turn: u32,
    max_rounds: u32,
    outcome: TurnOutcome,
}

impl Engine {
    /// Creates an engine with an empty board at turn 0.
    #[instrument]
    pub fn new() -> Self {
        Self::with_max_rounds(DEFAULT_MAX_ROUNDS)
    }

    /// Creates an engine that declares a draw after `max_rounds` rounds.
    #[instrument]
    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            max_rounds,
            outcome: TurnOutcome::Continue,
        }
    }

    /// Resumes from an existing board at the given turn number.
    #[doc(hidden)]
    pub fn resume(board: Board, turn: u32) -> Self {
        Self {
            board,
            turn,
            ..Self::new()
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn number.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Round cap.
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Outcome of the last round played.
    pub fn outcome(&self) -> TurnOutcome {
        self.outcome
    }

    /// Places `player`'s mark at `position` and reports whether it wins.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `position` is not in 0-8.
    /// - [`MoveError::CellTaken`] if the square is occupied.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn place_mark(&mut self, position: i64, player: Player) -> Result<bool, MoveError> {
        let pos = Position::try_from(position)?;
        self.board.place(pos, player)?;
        debug!(%pos, "Mark placed");
        Ok(self.check_win())
    }

    /// Checks whether any line is complete. Always false before turn 3.
    pub fn check_win(&self) -> bool {
        self.turn >= FIRST_WINNING_TURN && self.board.winner().is_some()
    }

    /// Renders the board with its turn number header.
    pub fn render(&self) -> String {
        self.snapshot().to_string()
    }

    /// Copies the current board and turn number.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.turn, self.board.clone())
    }

    /// Plays one round: player 1, then player 2 unless the game ended.
    ///
    /// Invalid input is reported through `terminal` and the same player is
    /// asked again. Once the game is over this returns the final outcome
    /// without prompting.
    ///
    /// # Errors
    ///
    /// Only terminal failures escape, for example a closed input stream.
    #[instrument(skip_all, fields(turn = self.turn + 1))]
    pub fn run_round<T: Terminal + ?Sized>(
        &mut self,
        terminal: &mut T,
    ) -> Result<TurnOutcome, TerminalError> {
        if self.outcome.is_over() {
            return Ok(self.outcome);
        }

        self.turn += 1;
        for player in Player::in_turn_order() {
            if self.take_turn(terminal, player)? {
                info!(%player, turn = self.turn, "Player won");
                self.outcome = TurnOutcome::Won(player);
                return Ok(self.outcome);
            }
            if self.reached_cap(player) {
                info!(turn = self.turn, "No winner");
                self.outcome = TurnOutcome::Draw;
                return Ok(self.outcome);
            }
        }
        Ok(self.outcome)
    }

    /// Prompts `player` until a legal move is accepted, then prints the board.
    fn take_turn<T: Terminal + ?Sized>(
        &mut self,
        terminal: &mut T,
        player: Player,
    ) -> Result<bool, TerminalError> {
        loop {
            let line = terminal.prompt(&format!(
                "Player {}, Enter a number to place a pawn (0-8): ",
                player.number()
            ))?;
            match parse_int(&line).and_then(|pos| self.place_mark(pos, player)) {
                Ok(won) => {
                    terminal.print(&self.render())?;
                    return Ok(won);
                }
                Err(e) => {
                    warn!(%player, error = ?e, "Move rejected");
                    terminal.print_toned(&e.to_string(), Tone::Error)?;
                }
            }
        }
    }

    fn reached_cap(&self, player: Player) -> bool {
        (player == Player::One && self.turn >= self.max_rounds) || self.board.is_full()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedTerminal;
    use crate::types::Square;

    const O: Square = Square::Occupied(Player::One);
    const X: Square = Square::Occupied(Player::Two);
    const E: Square = Square::Empty;

    #[test]
    fn test_place_mark_every_position_on_empty_board() {
        for pos in 0..9i64 {
            for player in [Player::One, Player::Two] {
                let mut engine = Engine::new();
                assert_eq!(engine.place_mark(pos, player), Ok(false));
                let square = engine.board().get(Position::try_from(pos).unwrap());
                assert_eq!(square, Square::Occupied(player));
                assert_eq!(engine.board().occupied(), 1);
            }
        }
    }

    #[test]
    fn test_place_mark_out_of_range() {
        let mut engine = Engine::new();
        for pos in [-1, -100, 9, 42] {
            assert_eq!(
                engine.place_mark(pos, Player::One),
                Err(MoveError::OutOfRange(pos))
            );
        }
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_place_mark_taken_leaves_board() {
        let mut engine = Engine::new();
        engine.place_mark(4, Player::One).unwrap();
        let before = engine.board().clone();

        for player in [Player::One, Player::Two] {
            assert_eq!(
                engine.place_mark(4, player),
                Err(MoveError::CellTaken(Position::Center))
            );
        }
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_check_win_gated_by_turn() {
        let board = Board::from_squares([O, O, O, E, E, E, E, E, E]);
        for turn in 0..3 {
            assert!(!Engine::resume(board.clone(), turn).check_win());
        }
        for turn in 3..6 {
            assert!(Engine::resume(board.clone(), turn).check_win());
        }
    }

    #[test]
    fn test_check_win_full_board_without_line() {
        let board = Board::from_squares([O, X, O, X, O, X, X, O, X]);
        assert!(!Engine::resume(board, 5).check_win());
    }

    #[test]
    fn test_render_uses_current_turn() {
        let engine = Engine::resume(Board::new(), 4);
        assert!(engine.render().starts_with("Turn number 4:\n"));
    }

    #[test]
    fn test_run_round_advances_turn_once() {
        let mut engine = Engine::new();
        let mut term = ScriptedTerminal::new(["0", "4"]);

        assert_eq!(engine.run_round(&mut term).unwrap(), TurnOutcome::Continue);
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.board().occupied(), 2);
        assert_eq!(term.output().matches("Turn number 1:").count(), 2);
    }

    #[test]
    fn test_run_round_retries_same_player() {
        let mut engine = Engine::new();
        let mut term = ScriptedTerminal::new(["abc", "9", "0", "0", "1"]);

        assert_eq!(engine.run_round(&mut term).unwrap(), TurnOutcome::Continue);
        assert_eq!(term.remaining(), 0);

        let errors: Vec<_> = term
            .messages()
            .iter()
            .filter(|(tone, _)| *tone == Tone::Error)
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(
            errors,
            vec![
                "Please enter a valid number",
                "Enter a correct number (0-8)",
                "Place is already taken, please enter another one",
            ]
        );
        assert_eq!(
            term.output()
                .matches("Player 1, Enter a number to place a pawn (0-8): ")
                .count(),
            3
        );
        assert_eq!(engine.board().get(Position::TopCenter), X);
    }

    #[test]
    fn test_run_round_stops_after_win() {
        let board = Board::from_squares([O, O, E, X, X, E, E, E, E]);
        let mut engine = Engine::resume(board, 2);
        let mut term = ScriptedTerminal::new(["2", "5"]);

        assert_eq!(
            engine.run_round(&mut term).unwrap(),
            TurnOutcome::Won(Player::One)
        );
        assert_eq!(term.remaining(), 1);
        assert!(!term.output().contains("Player 2"));
    }

    #[test]
    fn test_run_round_after_game_over_does_not_prompt() {
        let mut engine = Engine::with_max_rounds(1);
        let mut term = ScriptedTerminal::new(["4"]);

        assert_eq!(engine.run_round(&mut term).unwrap(), TurnOutcome::Draw);
        assert_eq!(engine.run_round(&mut term).unwrap(), TurnOutcome::Draw);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn test_run_round_closed_input_is_an_error() {
        let mut engine = Engine::new();
        let mut term = ScriptedTerminal::new(["0"]);
        assert!(engine.run_round(&mut term).is_err());
    }
}
