//! Opt-in legality checks for submitted rounds.
//!
//! A round arrives without history, so these checks can only look at
//! counts: X opens, marks alternate, and nothing is blocked while play
//! is still going on. Whether a cell was overwritten after being set
//! can't be seen from a single board.

use super::input::Submission;
use super::{Cell, Mark, Turn};
use tracing::{instrument, warn};

/// A logical property a submission must satisfy.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every invariant that failed.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(I1::description());
        }
        if !I2::holds(state) {
            violations.push(I2::description());
        }
        if !I3::holds(state) {
            violations.push(I3::description());
        }
        if !I4::holds(state) {
            violations.push(I4::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X has placed as many marks as O, or one more.
pub struct BalancedMarks;

impl Invariant<Submission> for BalancedMarks {
    fn holds(state: &Submission) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// The submitted turn is the one the mark counts imply.
pub struct TurnMatchesCounts;

impl Invariant<Submission> for TurnMatchesCounts {
    fn holds(state: &Submission) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        match state.turn() {
            Turn::NotStarted => true,
            Turn::Played(Mark::X) => x == o + 1,
            Turn::Played(Mark::O) => x == o,
        }
    }

    fn description() -> &'static str {
        "The turn that moved matches the mark counts"
    }
}

/// Nothing is on the board before the opening move.
pub struct OpeningBoardEmpty;

impl Invariant<Submission> for OpeningBoardEmpty {
    fn holds(state: &Submission) -> bool {
        *state.turn() != Turn::NotStarted
            || state.board().cells().iter().all(|cell| *cell == Cell::Empty)
    }

    fn description() -> &'static str {
        "The board is empty before the opening move"
    }
}

/// Blocked cells only appear on finalized boards, never in a submission.
pub struct NoBlockedCells;

impl Invariant<Submission> for NoBlockedCells {
    fn holds(state: &Submission) -> bool {
        !state.board().cells().contains(&Cell::Blocked)
    }

    fn description() -> &'static str {
        "No cell is blocked while play continues"
    }
}

/// Every legality invariant, composed.
pub type LegalityInvariants = (
    BalancedMarks,
    TurnMatchesCounts,
    OpeningBoardEmpty,
    NoBlockedCells,
);

/// A submission that couldn't have come from legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Illegal round: {}", violations.join("; "))]
pub struct LegalityError {
    /// Descriptions of the violated invariants.
    pub violations: Vec<&'static str>,
}

impl std::error::Error for LegalityError {}

/// Checks a submission against [`LegalityInvariants`].
#[instrument]
pub fn check_legality(submission: &Submission) -> Result<(), LegalityError> {
    LegalityInvariants::check_all(submission).map_err(|violations| {
        warn!(?violations, "Illegal submission");
        LegalityError { violations }
    })
}
