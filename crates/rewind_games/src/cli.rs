//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play {
        /// Name of the first game session
        #[arg(long, default_value = "main")]
        session: String,
    },

    /// Apply a list of cell indices and print the result
    Replay {
        /// Cell indices (0-8) in play order
        #[arg(allow_negative_numbers = true)]
        moves: Vec<isize>,

        /// Ply to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
