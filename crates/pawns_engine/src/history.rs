//! Round snapshots and the end-of-game summary.

use super::types::Board;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

const SEPARATOR: &str = "|----|----|----|";

/// A copy of the board taken at a turn number.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Snapshot {
    /// Turn number the board was captured at.
    turn: u32,
    /// Board as it was at capture time.
    board: Board,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn number {}:", self.turn)?;
        writeln!(f, "{SEPARATOR}")?;
        for row in self.board.squares().chunks(3) {
            writeln!(f, "| {}  | {}  | {}  |", row[0], row[1], row[2])?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Ordered snapshots, one per round played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    rounds: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.rounds.push(snapshot);
    }

    /// Recorded snapshots in order.
    pub fn rounds(&self) -> &[Snapshot] {
        &self.rounds
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Game Summary ===")?;
        for snapshot in &self.rounds {
            write!(f, "\n{snapshot}\n")?;
        }
        write!(f, "\n===============\n")
    }
}
