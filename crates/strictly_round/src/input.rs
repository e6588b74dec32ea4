//! Boundary validation for client-supplied rounds.
//!
//! Clients send the turn and all nine cells as plain strings. Nothing is
//! defaulted: an unknown turn or cell symbol is rejected rather than
//! being read as a fresh game.

use super::{Board, Cell, Position, Turn};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Raw round input, exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RoundInput {
    /// Turn just played ("" before the opening move).
    #[serde(default)]
    pub turn: String,
    /// Cell symbols by row, then column.
    #[serde(default)]
    pub cells: [[String; 3]; 3],
}

impl RoundInput {
    /// Sets the raw value of one cell.
    pub fn set_cell(&mut self, position: Position, value: impl Into<String>) {
        self.cells[position.row()][position.col()] = value.into();
    }

    /// Raw value of one cell.
    pub fn cell(&self, position: Position) -> &str {
        &self.cells[position.row()][position.col()]
    }

    /// Validates every field, producing a typed submission.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn validate(&self) -> Result<Submission, InputError> {
        let turn = self.turn.parse::<Turn>().map_err(|_| {
            warn!(turn = %self.turn, "Rejected turn");
            InputError::InvalidTurn(self.turn.clone())
        })?;

        let mut board = Board::new();
        for position in Position::ALL {
            let value = self.cell(position);
            debug!(%position, value, "Cell input");
            let cell = value.parse::<Cell>().map_err(|_| {
                warn!(%position, value, "Rejected cell");
                InputError::InvalidCell {
                    position,
                    value: value.to_string(),
                }
            })?;
            board.set(position, cell);
        }

        Ok(Submission { board, turn })
    }
}

impl From<&Submission> for RoundInput {
    fn from(submission: &Submission) -> Self {
        let mut input = RoundInput {
            turn: submission.turn.symbol().to_string(),
            ..Default::default()
        };
        for position in Position::ALL {
            input.set_cell(position, submission.board.get(position).symbol());
        }
        input
    }
}

/// A validated board and the turn that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct Submission {
    /// The board after the move.
    board: Board,
    /// The turn that just moved.
    turn: Turn,
}

/// Error produced when client input can't be read as a round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Turn is neither empty nor a mark symbol.
    #[display("Invalid turn {:?}: expected \"\", \"X\" or \"O\"", _0)]
    InvalidTurn(String),

    /// Cell is neither empty, a mark symbol nor the blocked marker.
    #[display("Invalid cell {:?} at {}", value, position)]
    InvalidCell {
        /// Where the bad value was found.
        position: Position,
        /// The value as sent.
        value: String,
    },
}

impl std::error::Error for InputError {}
