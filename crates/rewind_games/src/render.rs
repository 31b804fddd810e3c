//! Text rendering of the game read model.

use rewind_tictactoe::{Board, Cell, GameState, Outcome, Position};

/// Status line: `Winner: X`, `Draw`, or `Next player: O`.
pub fn status_line(game: &GameState) -> String {
    match game.outcome() {
        Some(Outcome::Winner(mark)) => format!("Winner: {}", mark),
        Some(Outcome::Draw) => "Draw".to_string(),
        None => format!("Next player: {}", game.active_player()),
    }
}

/// Label of a history list item.
pub fn move_label(ply: usize) -> String {
    if ply == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", ply)
    }
}

/// Board as a 3x3 grid; empty cells show their index when `show_coordinates`.
pub fn board_grid(board: &Board, show_coordinates: bool) -> String {
    let mut result = String::new();
    for (i, pos) in Position::ALL.iter().enumerate() {
        let symbol = match board.get(*pos) {
            Cell::Marked(mark) => mark.to_string(),
            Cell::Empty if show_coordinates => i.to_string(),
            Cell::Empty => " ".to_string(),
        };
        result.push(' ');
        result.push_str(&symbol);
        result.push(' ');
        if pos.col() < 2 {
            result.push('|');
        } else if pos.row() < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// History list, one line per recorded ply; the current ply is marked `>`.
pub fn history_list(game: &GameState) -> String {
    let mut moves = game.moves();
    (0..game.len())
        .map(|ply| {
            let marker = if ply == game.cursor() { '>' } else { ' ' };
            let detail = if ply == 0 {
                String::new()
            } else {
                moves
                    .next()
                    .map(|m| format!(" ({} at {})", m.mark, m.position))
                    .unwrap_or_default()
            };
            format!("{} {}: {}{}", marker, ply, move_label(ply), detail)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full screen: board, status, then history.
pub fn screen(game: &GameState, show_coordinates: bool) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        board_grid(game.current_board(), show_coordinates),
        status_line(game),
        history_list(game)
    )
}
