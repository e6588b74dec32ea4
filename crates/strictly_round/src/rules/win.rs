//! Win detection.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight lines of three: rows, columns, diagonals.
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

/// Checks if `mark` holds all three cells of any line.
#[instrument]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}

/// Returns every line `mark` has completed.
#[instrument]
pub fn winning_lines(board: &Board, mark: Mark) -> Vec<[Position; 3]> {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .filter(|line| line.iter().all(|&pos| board.get(pos) == target))
        .copied()
        .collect()
}
