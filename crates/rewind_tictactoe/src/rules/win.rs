//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line on the board, in [`LINES`] order.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}

/// Evaluates the board for a winner.
///
/// Returns `Some(mark)` if `mark` fills any line, `None` otherwise. When
/// several lines are complete the first one in [`LINES`] decides, so boards
/// that could never arise in play still get a well-defined answer.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(evaluate(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(evaluate(&board), Some(Mark::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Mark::O)));
            assert_eq!(winning_line(&board), Some(line));
            assert_eq!(evaluate(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_decides_unreachable_board() {
        // X owns the top row, O owns the bottom row.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(evaluate(&board), Some(Mark::X));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let board = board_with(&[
            (Position::TopLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        let before = board;
        let first = evaluate(&board);
        for _ in 0..5 {
            assert_eq!(evaluate(&board), first);
        }
        assert_eq!(board, before);
    }
}
