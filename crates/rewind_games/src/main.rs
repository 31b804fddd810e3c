//! Rewind Games - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{GameConfig, Input, SessionManager, input, render};
use rewind_tictactoe::GameState;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { session } => run_play(&config, session),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Applies `moves`, optionally jumps, and prints the result.
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, moves: &[isize], jump: Option<usize>, json: bool) -> Result<()> {
    let mut game = GameState::new();
    for (i, &cell) in moves.iter().enumerate() {
        game.apply_move(cell)
            .with_context(|| format!("move {} (cell {}) rejected", i + 1, cell))?;
    }
    if let Some(ply) = jump {
        game.jump_to(ply).context("jump rejected")?;
    }

    if json {
        let out = serde_json::to_string_pretty(&game.snapshot())
            .context("serializing snapshot")?;
        println!("{}", out);
    } else {
        println!("{}", render::screen(&game, *config.show_coordinates()));
    }
    Ok(())
}

/// Interactive loop over stdin.
#[instrument(skip(config))]
fn run_play(config: &GameConfig, first_session: String) -> Result<()> {
    let sessions = SessionManager::new(*config.max_sessions());
    let mut current = first_session;
    sessions.start(&current)?;
    info!(session_id = %current, "Interactive play started");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let show = *config.show_coordinates();

    println!("{}\n", input::HELP);
    println!("{}", render::screen(&sessions.game(&current)?, show));

    loop {
        print!("\n[{}]> ", current);
        stdout.flush().context("flushing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading input")? == 0 {
            debug!("End of input");
            break;
        }

        let parsed = match input::parse(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result = match parsed {
            Input::Move(index) => sessions.apply_move(&current, index).map(|_| ()),
            Input::Jump(ply) => sessions.jump_to(&current, ply).map(|_| ()),
            Input::New => sessions.start(&current).map(|_| ()),
            Input::Switch(name) => match sessions.get_or_start(&name) {
                Ok(_) => {
                    current = name;
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Input::History => {
                println!("{}", render::history_list(&sessions.game(&current)?));
                continue;
            }
            Input::Sessions => {
                for id in sessions.ids()? {
                    let marker = if id == current { '*' } else { ' ' };
                    println!("{} {}", marker, id);
                }
                continue;
            }
            Input::Help => {
                println!("{}", input::HELP);
                continue;
            }
            Input::Quit => break,
        };

        if let Err(e) = result {
            warn!(error = %e, "Command rejected");
            println!("{}", e);
            continue;
        }
        println!("\n{}", render::screen(&sessions.game(&current)?, show));
    }

    info!("Interactive play finished");
    Ok(())
}
