//! Strictly Round - stateless tic-tac-toe round evaluation
//!
//! Given the board after a move and the turn that made it, decide whether
//! that move won or drew the game, which mark plays next, and close the
//! board after a win.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, turns and the fixed 3x3 board
//! - **Turn**: alternation, X opens
//! - **Rules**: win, draw and finalization as pure functions
//! - **Round**: composes the rules into one evaluation
//! - **Input**: validates client strings into typed submissions
//! - **Legality**: optional count-based plausibility checks
//!
//! # Example
//!
//! ```
//! use strictly_round::{Board, Cell, Mark, Position, RoundPhase, Turn, evaluate_round};
//!
//! let x = Cell::Occupied(Mark::X);
//! let board = Board::new()
//!     .with(Position::TopLeft, x)
//!     .with(Position::TopCenter, x)
//!     .with(Position::TopRight, x);
//!
//! let result = evaluate_round(board, Turn::Played(Mark::X));
//! assert_eq!(result.phase(), RoundPhase::Won);
//! assert_eq!(result.board().get(Position::Center), Cell::Blocked);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod input;
mod legality;
mod position;
mod round;
pub mod rules;
mod turn;
mod types;

pub use input::{InputError, RoundInput, Submission};
pub use legality::{
    BalancedMarks, Invariant, InvariantSet, LegalityError, LegalityInvariants, NoBlockedCells,
    OpeningBoardEmpty, TurnMatchesCounts, check_legality,
};
pub use position::Position;
pub use round::{RoundPhase, RoundResult, evaluate_round, evaluate_submission};
pub use rules::{finalize, has_won, is_draw, winning_lines};
pub use turn::next_turn;
pub use types::{BLOCKED_SYMBOL, Board, Cell, Mark, Turn, UnknownSymbol};
