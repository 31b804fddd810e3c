//! Move records and move errors.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A historical move: the mark placed at a position to reach a ply.
///
/// Moves are derived from consecutive history snapshots, never stored
/// separately, so they cannot drift from the boards they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Ply reached by this move (1 for the first move).
    pub ply: usize,
    /// The mark placed.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move record.
    pub fn new(ply: usize, mark: Mark, position: Position) -> Self {
        Self {
            ply,
            mark,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.ply, self.mark, self.position.label())
    }
}

/// Error returned when a move or jump is rejected.
///
/// A rejected call never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(isize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board at the current ply already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameAlreadyOver(Mark),

    /// Ply outside the recorded history.
    #[display("Ply {} is outside recorded history (0..{})", ply, len)]
    InvalidPly {
        /// Requested ply.
        ply: usize,
        /// Number of recorded plies.
        len: usize,
    },

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
