//! Tic-tac-toe with full move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one board snapshot ([`rules::evaluate`]
//!   finds a winner, [`rules::is_draw`] a stalemate)
//! - **GameState**: an append-only log of [`HistoryEntry`] snapshots and a
//!   cursor; the active player and status are derived from the cursor
//! - **Contracts / Invariants**: move preconditions and history properties
//!   checked on every transition
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//!
//! // Back to the start; the recorded moves remain until a new move is made.
//! game.jump_to(0)?;
//! assert_eq!(game.status(), GameStatus::InProgress(Mark::X));
//! assert_eq!(game.len(), 6);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, MoveContract};
pub use game::{GameSnapshot, GameState, GameStatus, Outcome};
pub use history::HistoryEntry;
pub use invariants::{
    CursorInBoundsInvariant, HaltsOnWinInvariant, HistoryInvariants, Invariant, InvariantViolation,
    MonotonicHistoryInvariant,
};
pub use position::Position;
pub use types::{Board, Cell, Mark};
