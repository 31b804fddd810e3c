//! Parsing of interactive commands.

use derive_more::{Display, Error};
use rewind_tictactoe::Position;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell, by raw index (may be out of range) or label.
    Move(isize),
    /// Jump to a recorded ply.
    Jump(usize),
    /// Print the history list.
    History,
    /// Start over in the current session.
    New,
    /// Switch to (or create) a named session.
    Switch(String),
    /// List sessions.
    Sessions,
    /// Print help.
    Help,
    /// Leave.
    Quit,
}

/// Unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}' (type 'help')", line)]
pub struct ParseError {
    /// The offending line.
    pub line: String,
}

/// Help text for the interactive prompt.
pub const HELP: &str = "\
Commands:
  <0-8> | <label>   mark a cell (e.g. 4 or center)
  jump <ply>        go to a recorded ply (0 = game start)
  history           list recorded plies
  new               start over
  switch <name>     switch to another game
  sessions          list games
  help              show this help
  quit              exit";

/// Parses one line of input.
pub fn parse(line: &str) -> Result<Input, ParseError> {
    let line = line.trim();
    let err = || ParseError {
        line: line.to_string(),
    };
    let mut words = line.split_whitespace();
    let head = words.next().ok_or_else(err)?.to_lowercase();
    let rest = words.collect::<Vec<_>>().join(" ");

    let input = match (head.as_str(), rest.as_str()) {
        ("jump" | "j", ply) => Input::Jump(ply.parse().map_err(|_| err())?),
        ("switch" | "s", name) if !name.is_empty() => Input::Switch(name.to_string()),
        ("history" | "h", "") => Input::History,
        ("new" | "n", "") => Input::New,
        ("sessions", "") => Input::Sessions,
        ("help" | "?", "") => Input::Help,
        ("quit" | "q" | "exit", "") => Input::Quit,
        _ => match line.parse::<isize>() {
            Ok(index) => Input::Move(index),
            Err(_) => Position::from_label_or_number(line)
                .map(|pos| Input::Move(pos.to_index() as isize))
                .ok_or_else(err)?,
        },
    };
    Ok(input)
}
