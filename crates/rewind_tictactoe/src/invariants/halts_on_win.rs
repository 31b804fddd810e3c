//! Play stops at the first winning board.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: only the last recorded entry may hold a winning board.
pub struct HaltsOnWinInvariant;

impl Invariant for HaltsOnWinInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .rev()
            .skip(1)
            .all(|entry| rules::evaluate(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No ply follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Mark, Position};

    #[test]
    fn test_won_game_holds() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ])
        .unwrap();
        assert!(HaltsOnWinInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ])
        .unwrap();
        let board = game.current_board().with_mark(Position::BottomLeft, Mark::O);
        game.history.push(HistoryEntry::new(board, Position::BottomLeft));
        assert!(!HaltsOnWinInvariant::holds(&game));
    }
}
