//! Terminal front end for `rewind_tictactoe`.
//!
//! The game core owns all rules and history; this crate only renders its
//! read model, parses user input, and keeps several named games apart.
//!
//! - **Config**: TOML-backed [`GameConfig`]
//! - **Session**: [`SessionManager`], one game per session id
//! - **Render / Input**: text presentation and command parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod input;
pub mod render;
mod session;

pub use config::{ConfigError, GameConfig};
pub use input::{Input, ParseError};
pub use session::{SessionError, SessionId, SessionManager};
