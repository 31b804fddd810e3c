//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::HistoryInvariants;
use super::{Position, rules};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state produced by the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(*pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(*pos))
        }
    }
}

/// Precondition: the board at the current ply has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match rules::evaluate(game.current_board()) {
            Some(winner) => Err(MoveError::GameAlreadyOver(winner)),
            None => Ok(()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions, in order:
/// - Cell must be empty
/// - Current board must have no winner
///
/// Postconditions:
/// - Cursor advanced by exactly one
/// - History up to the old cursor is untouched and exactly one entry follows it
/// - All [`HistoryInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        CellIsEmpty::check(pos, game)?;
        GameNotOver::check(game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let kept = before.cursor + 1;
        if after.cursor != kept {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: cursor moved from {} to {}",
                before.cursor, after.cursor
            )));
        }
        if after.history.len() != kept + 1 || after.history[..kept] != before.history[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history prefix was not preserved".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Mark};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameState::replay(&[Position::Center]).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::replay(&[Position::Center]).unwrap();
        let mut after = before.clone();
        after.place(Position::TopLeft).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_prefix() {
        let before = GameState::replay(&[Position::Center]).unwrap();
        let mut after = before.clone();
        after.place(Position::TopLeft).unwrap();

        // Rewrite ply 1 with a different first move.
        let board = crate::Board::new().with_mark(Position::BottomRight, Mark::X);
        after.history[1] = HistoryEntry::new(board, Position::BottomRight);

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
