//! Turn alternation.

use super::{Mark, Turn};
use tracing::instrument;

/// Returns the mark that moves after `turn`.
///
/// X opens the game; afterwards the marks alternate.
#[instrument]
pub fn next_turn(turn: Turn) -> Mark {
    match turn {
        Turn::NotStarted => Mark::X,
        Turn::Played(mark) => mark.opponent(),
    }
}
