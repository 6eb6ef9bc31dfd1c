//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, derive_more::Display,
)]
pub enum Player {
    /// Player 1 (moves first, plays `O`).
    #[display("1")]
    One,
    /// Player 2 (plays `X`).
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown in prompts.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Character drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }

    /// Both players in turn order.
    pub fn in_turn_order() -> impl Iterator<Item = Player> {
        Player::iter()
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player.mark()),
        }
    }
}

/// Winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// 3x3 tic-tac-toe board.
///
/// Squares are only ever filled through [`Board::place`], which refuses to
/// overwrite an occupied square.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a row-major layout.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a player's mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellTaken`] if the square is occupied. The board
    /// is left untouched in that case.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellTaken(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the owner of the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| match self.get(a) {
            Square::Occupied(p) if self.get(b) == self.get(a) && self.get(c) == self.get(a) => {
                Some(p)
            }
            _ => None,
        })
    }
}
