//! Cursor invariant: the current ply is always recorded.

use super::super::GameState;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.cursor < game.history.len()
    }

    fn description() -> &'static str {
        "Cursor indexes a recorded ply"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_cursor_after_jump_holds() {
        let mut game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_cursor_past_tip_violates() {
        let mut game = GameState::new();
        game.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
