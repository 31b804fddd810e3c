//! Properties of the recorded history.
//!
//! Every history a [`GameState`] can reach satisfies all of these.
//! [`HistoryInvariants::check_all`] runs them after each move in debug builds.

use super::GameState;

pub mod cursor_bounds;
pub mod halts_on_win;
pub mod monotonic_history;

pub use cursor_bounds::CursorInBoundsInvariant;
pub use halts_on_win::HaltsOnWinInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// A property of a game's whole history and cursor.
pub trait Invariant {
    /// True if the property holds for `game`.
    fn holds(game: &GameState) -> bool;

    /// What the property requires.
    fn description() -> &'static str;
}

/// A history property that failed, and where the cursor stood at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{} (cursor at ply {})", description, ply)]
pub struct InvariantViolation {
    /// The violated property.
    pub description: &'static str,
    /// Cursor of the checked game.
    pub ply: usize,
}

type Check = (fn(&GameState) -> bool, fn() -> &'static str);

/// Every history invariant, checked together.
pub struct HistoryInvariants;

impl HistoryInvariants {
    const CHECKS: [Check; 3] = [
        (
            MonotonicHistoryInvariant::holds,
            MonotonicHistoryInvariant::description,
        ),
        (
            CursorInBoundsInvariant::holds,
            CursorInBoundsInvariant::description,
        ),
        (HaltsOnWinInvariant::holds, HaltsOnWinInvariant::description),
    ];

    /// Runs every invariant, collecting all that fail.
    pub fn check_all(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .into_iter()
            .filter(|(holds, _)| !holds(game))
            .map(|(_, description)| InvariantViolation {
                description: description(),
                ply: game.cursor(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
