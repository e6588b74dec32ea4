//! Draw detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is taken.
///
/// Only meaningful once [`has_won`](super::has_won) has returned false for
/// the mark that just moved: a full board with a completed line is a win,
/// not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::has_won;
    use super::*;

    fn drawn_board() -> Board {
        // X O X / O X X / O X O
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        Board::from_rows([[x, o, x], [o, x, x], [o, x, o]])
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = drawn_board().with(Position::BottomRight, Cell::Empty);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_blocked_cells_count_as_taken() {
        let mut board = drawn_board().with(Position::Center, Cell::Empty);
        board.block_empty();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_ignores_wins() {
        // Full board where X holds the top row; the caller must check wins first.
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let board = Board::from_rows([[x, x, x], [o, o, x], [x, o, o]]);
        assert!(has_won(&board, Mark::X));
        assert!(is_draw(&board));
    }
}
