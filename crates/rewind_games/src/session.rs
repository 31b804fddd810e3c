//! Named game sessions.
//!
//! Each session owns exactly one [`GameState`]; the manager serializes every
//! move and jump behind a single lock so no two calls touch a game at once.

use derive_more::Display;
use rewind_tictactoe::{GameSnapshot, GameState, MoveError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Error from a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// No session with this id.
    #[display("Session '{}' not found", _0)]
    NotFound(SessionId),

    /// Session limit reached.
    #[display("Session limit of {} reached", _0)]
    Full(usize),

    /// The game rejected the call.
    #[display("{}", _0)]
    Move(MoveError),

    /// A previous holder of the lock panicked.
    #[display("Session registry lock poisoned")]
    Poisoned,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// Registry of independent games keyed by session id.
///
/// Cloning shares the registry.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameState>>>,
    max_sessions: usize,
}

impl SessionManager {
    /// Creates an empty registry holding at most `max_sessions` games.
    #[instrument]
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, GameState>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Session registry lock poisoned");
            SessionError::Poisoned
        })
    }

    /// Starts a fresh game under `id`, replacing any game already there.
    #[instrument(skip(self))]
    pub fn start(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        let mut sessions = self.lock()?;
        if !sessions.contains_key(id) && sessions.len() >= self.max_sessions {
            warn!(limit = self.max_sessions, "Session limit reached");
            return Err(SessionError::Full(self.max_sessions));
        }

        let game = GameState::new();
        let snapshot = game.snapshot();
        sessions.insert(id.to_string(), game);
        info!(session_id = %id, "Started game session");
        Ok(snapshot)
    }

    /// Returns the session's game, starting one if it does not exist.
    #[instrument(skip(self))]
    pub fn get_or_start(&self, id: &str) -> Result<GameState, SessionError> {
        let mut sessions = self.lock()?;
        let count = sessions.len();
        match sessions.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                if count >= self.max_sessions {
                    warn!(limit = self.max_sessions, "Session limit reached");
                    return Err(SessionError::Full(self.max_sessions));
                }
                let game = entry.insert(GameState::new()).clone();
                info!(session_id = %id, "Started game session");
                Ok(game)
            }
        }
    }

    /// Applies a move in the given session.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: &str, index: isize) -> Result<GameSnapshot, SessionError> {
        self.with_game(id, |game| {
            game.apply_move(index)?;
            Ok(game.snapshot())
        })
    }

    /// Jumps the given session to a recorded ply.
    #[instrument(skip(self))]
    pub fn jump_to(&self, id: &str, ply: usize) -> Result<GameSnapshot, SessionError> {
        self.with_game(id, |game| {
            game.jump_to(ply)?;
            Ok(game.snapshot())
        })
    }

    /// Returns a copy of the session's game.
    #[instrument(skip(self))]
    pub fn game(&self, id: &str) -> Result<GameState, SessionError> {
        self.with_game(id, |game| Ok(game.clone()))
    }

    /// Read model of the session's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        self.with_game(id, |game| Ok(game.snapshot()))
    }

    /// Removes a session, returning its final game.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<GameState, SessionError> {
        let removed = self.lock()?.remove(id);
        match removed {
            Some(game) => {
                info!(session_id = %id, "Removed game session");
                Ok(game)
            }
            None => Err(SessionError::NotFound(id.to_string())),
        }
    }

    /// Ids of all sessions, sorted.
    pub fn ids(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<SessionId> = self.lock()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Number of sessions.
    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.lock()?.len())
    }

    /// True if no session exists.
    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.lock()?.is_empty())
    }

    fn with_game<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameState) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock()?;
        let game = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = %id, "Session not found");
            SessionError::NotFound(id.to_string())
        })?;
        f(game)
    }
}
