//! Game state with full history and time travel.
//!
//! The game is an append-only log of board snapshots plus a cursor into it.
//! Everything else (whose turn it is, whether someone has won) is derived
//! from the snapshot under the cursor, never stored.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::HistoryEntry;
use super::rules;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Observable mode of the game at the current ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the mark is the player to move.
    InProgress(Mark),
    /// The board at the current ply has a completed line.
    Won(Mark),
}

/// Terminal result of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// Every cell is filled and nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Serializable read model of a game, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board at the current ply.
    pub board: Board,
    /// Current ply.
    pub ply: usize,
    /// Number of recorded plies (including ply 0).
    pub history_len: usize,
    /// Status at the current ply.
    pub status: GameStatus,
    /// Terminal result at the current ply, if any.
    pub outcome: Option<Outcome>,
    /// Empty positions at the current ply.
    pub valid_moves: Vec<Position>,
}

/// Tic-tac-toe game with move history and time travel.
///
/// `history[0]` is always the empty board and `cursor` always indexes a
/// recorded entry. Moves made after jumping back replace the entries past
/// the cursor; jumping alone never discards anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
}

impl GameState {
    /// Creates a new game at ply 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            cursor: 0,
        }
    }

    /// Rebuilds a game by playing `moves` from the start.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, as [`GameState::place`] would.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in moves {
            game.place(pos)?;
        }
        Ok(game)
    }

    /// The full recorded history, ply 0 first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Current ply.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded plies, including ply 0.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True if no ply is recorded. A game built through [`GameState::new`] or
    /// [`GameState::replay`] always records ply 0, so this stays false.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Highest recorded ply.
    pub fn tip(&self) -> usize {
        self.history.len() - 1
    }

    /// History entry under the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.cursor]
    }

    /// Board at the current ply.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Mark to move at the current ply: X on even plies, O on odd.
    pub fn active_player(&self) -> Mark {
        Mark::for_ply(self.cursor)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::evaluate(self.current_board())
    }

    /// Status at the current ply.
    #[instrument(skip(self), fields(ply = self.cursor))]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::Won(mark),
            None => GameStatus::InProgress(self.active_player()),
        }
    }

    /// Terminal result at the current ply, distinguishing draws.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(Outcome::Winner(mark)),
            None if rules::is_full(self.current_board()) => Some(Outcome::Draw),
            None => None,
        }
    }

    /// True when the current board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Empty positions at the current ply.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.current_board())
    }

    /// Moves that produced plies 1..=tip.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(ply, entry)| {
                entry
                    .placed()
                    .map(|pos| Move::new(ply, Mark::for_ply(ply - 1), pos))
            })
    }

    /// Read model for presentation layers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.current_board(),
            ply: self.cursor,
            history_len: self.history.len(),
            status: self.status(),
            outcome: self.outcome(),
            valid_moves: self.valid_moves(),
        }
    }

    /// Places the active player's mark at a raw cell index.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::InvalidIndex`] if `index` is outside
    /// 0-8, then whatever [`GameState::place`] rejects.
    #[instrument(skip(self), fields(ply = self.cursor))]
    pub fn apply_move(&mut self, index: isize) -> Result<(), MoveError> {
        let pos = Position::try_from(index).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.place(pos)
    }

    /// Places the active player's mark at `pos`.
    ///
    /// Entries past the current ply are discarded before the new board is
    /// appended, and the cursor advances by one.
    ///
    /// # Errors
    ///
    /// [`MoveError::CellOccupied`] if the cell holds a mark, then
    /// [`MoveError::GameAlreadyOver`] if the current board has a winner.
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(ply = self.cursor, mark = %self.active_player()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::pre(self, &pos) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let board = self.current_board().with_mark(pos, self.active_player());

        // Copy the prefix up to the cursor, then append.
        let mut history = self.history[..=self.cursor].to_vec();
        history.push(HistoryEntry::new(board, pos));
        let candidate = Self {
            history,
            cursor: self.cursor + 1,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &candidate)?;

        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding plies past the cursor");
        }

        *self = candidate;
        info!(ply = self.cursor, status = ?self.status(), "Move applied");
        Ok(())
    }

    /// Moves the cursor to `ply` without touching the stored history.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPly`] if `ply` was never recorded.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to(&mut self, ply: usize) -> Result<(), MoveError> {
        if ply >= self.history.len() {
            let e = MoveError::InvalidPly {
                ply,
                len: self.history.len(),
            };
            warn!(error = %e, "Jump rejected");
            return Err(e);
        }

        self.cursor = ply;
        debug!(status = ?self.status(), "Jumped");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn play(game: &mut GameState, cells: &[isize]) {
        for &cell in cells {
            game.apply_move(cell).expect("legal move");
        }
    }

    #[test]
    fn test_new_game_starts_empty_at_ply_zero() {
        let game = GameState::new();
        assert_eq!(game.len(), 1);
        assert!(!game.is_empty());
        assert_eq!(game.cursor(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.status(), GameStatus::InProgress(Mark::X));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_move_at_tip_grows_history() {
        let mut game = GameState::new();
        play(&mut game, &[4]);
        assert_eq!(game.len(), 2);
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.current_board().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(game.active_player(), Mark::O);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        let before = game.clone();

        assert_eq!(game.apply_move(4), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(game.apply_move(-1), Err(MoveError::InvalidIndex(-1)));
        assert_eq!(game.apply_move(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_occupied_checked_before_game_over() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 1, 5, 2]);
        assert_eq!(game.apply_move(0), Err(MoveError::CellOccupied(Position::TopLeft)));
        assert_eq!(game.apply_move(8), Err(MoveError::GameAlreadyOver(Mark::X)));
    }

    #[test]
    fn test_jump_keeps_future_until_next_move() {
        let mut game = GameState::new();
        play(&mut game, &[0, 4, 1]);

        game.jump_to(1).unwrap();
        assert_eq!(game.len(), 4);
        assert_eq!(game.active_player(), Mark::O);

        game.jump_to(3).unwrap();
        assert_eq!(game.cursor(), 3);

        game.jump_to(1).unwrap();
        play(&mut game, &[8]);
        assert_eq!(game.len(), 3);
        assert_eq!(game.cursor(), 2);
        assert_eq!(game.current_board().get(Position::BottomRight), Cell::Marked(Mark::O));
        assert!(game.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameState::new();
        play(&mut game, &[0]);
        assert_eq!(game.jump_to(2), Err(MoveError::InvalidPly { ply: 2, len: 2 }));
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn test_moves_derived_from_history() {
        let game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        let moves: Vec<Move> = game.moves().collect();
        assert_eq!(
            moves,
            vec![
                Move::new(1, Mark::X, Position::Center),
                Move::new(2, Mark::O, Position::TopLeft),
            ]
        );
    }

    #[test]
    fn test_snapshot_reflects_cursor() {
        let mut game = GameState::replay(&[Position::Center]).unwrap();
        game.jump_to(0).unwrap();
        let snap = game.snapshot();
        assert_eq!(snap.ply, 0);
        assert_eq!(snap.history_len, 2);
        assert_eq!(snap.valid_moves.len(), 9);
        assert_eq!(snap.status, GameStatus::InProgress(Mark::X));
    }
}
