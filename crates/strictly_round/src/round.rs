//! Per-request round evaluation.
//!
//! There is no server-side game session. The board and the turn that just
//! moved arrive with every request and are the whole truth; a round is
//! evaluated from them and then forgotten.

use super::input::Submission;
use super::rules::{finalize, has_won, is_draw, winning_lines};
use super::turn::next_turn;
use super::{Board, Mark, Turn};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// How a round ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No move played yet.
    #[display("opening")]
    Opening,
    /// The mark that just moved completed a line.
    #[display("won")]
    Won,
    /// Board is full and nobody won.
    #[display("drawn")]
    Drawn,
    /// Play goes on.
    #[display("continuing")]
    Continuing,
}

/// Outcome of evaluating one round.
///
/// Only [`evaluate_round`] builds this, which keeps three things true:
/// `win` and `draw` are never both set, `winner` is present exactly when
/// `win` is, and a won board has no empty cells left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    phase: RoundPhase,
    next_turn: Mark,
    win: bool,
    draw: bool,
    winner: Option<Mark>,
    board: Board,
}

impl RoundResult {
    /// Returns the phase label.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Mark to play next. Still computed after a win, but nobody plays it.
    pub fn next_turn(&self) -> Mark {
        self.next_turn
    }

    /// True when the mark that just moved won.
    pub fn win(&self) -> bool {
        self.win
    }

    /// True when the board filled up without a winner.
    pub fn draw(&self) -> bool {
        self.draw
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Winner symbol, or "" when nobody has won.
    pub fn winner_label(&self) -> &'static str {
        self.winner.map(Mark::symbol).unwrap_or("")
    }

    /// The board, finalized after a win.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True when no further moves should be offered.
    pub fn is_over(&self) -> bool {
        self.win || self.draw
    }
}

/// Evaluates the move `turn` just made on `board`.
///
/// Total over its inputs: any board and turn produce a result.
#[instrument]
pub fn evaluate_round(board: Board, turn: Turn) -> RoundResult {
    let Some(mark) = turn.mark() else {
        debug!("Game not started, skipping evaluation");
        return RoundResult {
            phase: RoundPhase::Opening,
            next_turn: next_turn(turn),
            win: false,
            draw: false,
            winner: None,
            board,
        };
    };

    let result = if has_won(&board, mark) {
        debug!(lines = ?winning_lines(&board, mark), "Winning lines");
        RoundResult {
            phase: RoundPhase::Won,
            next_turn: next_turn(turn),
            win: true,
            draw: false,
            winner: Some(mark),
            board: finalize(board),
        }
    } else {
        let draw = is_draw(&board);
        RoundResult {
            phase: if draw {
                RoundPhase::Drawn
            } else {
                RoundPhase::Continuing
            },
            next_turn: next_turn(turn),
            win: false,
            draw,
            winner: None,
            board,
        }
    };

    info!(
        phase = %result.phase,
        mark = %mark,
        next_turn = %result.next_turn,
        "Round evaluated"
    );
    result
}

/// Evaluates a validated submission.
#[instrument(skip(submission))]
pub fn evaluate_submission(submission: &Submission) -> RoundResult {
    evaluate_round(*submission.board(), *submission.turn())
}
