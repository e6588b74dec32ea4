//! Post-win board finalization.

use super::super::Board;
use tracing::instrument;

/// Closes a won board: every empty cell becomes blocked.
///
/// Marks are left untouched and blocked cells stay blocked, so applying
/// this twice is the same as applying it once.
#[instrument]
pub fn finalize(mut board: Board) -> Board {
    board.block_empty();
    board
}
