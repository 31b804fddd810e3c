//! History snapshots.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One recorded ply: the board after that ply and the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    placed: Option<Position>,
}

impl HistoryEntry {
    /// The entry for ply 0: an empty board with no move behind it.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    pub(crate) fn new(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Board snapshot at this ply.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell marked to reach this ply (`None` for ply 0).
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }
}
