//! Monotonic history invariant: each ply adds exactly one mark.

use super::super::{Board, Cell, GameState, Mark};
use super::Invariant;

/// Invariant: history starts empty and grows one mark per ply.
///
/// Entry 0 is the empty board. Each later entry differs from its
/// predecessor in exactly one cell, which went from empty to the mark of
/// the player active at the previous ply, and records that cell as placed.
pub struct MonotonicHistoryInvariant;

impl Invariant for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if *first.board() != Board::new() || first.placed().is_some() {
            return false;
        }

        history.windows(2).enumerate().all(|(ply, pair)| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            match prev.diff(next).as_slice() {
                [pos] => {
                    prev.get(*pos) == Cell::Empty
                        && next.get(*pos) == Cell::Marked(Mark::for_ply(ply))
                        && pair[1].placed() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "History starts empty and each ply adds one mark for the active player"
    }
}
