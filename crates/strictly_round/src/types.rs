//! Core domain types for a single tic-tac-toe round.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Symbol written into cells closed by a win.
pub const BLOCKED_SYMBOL: &str = "-";

/// A string that names neither a mark, an empty cell nor a blocked cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown symbol {:?}", _0)]
pub struct UnknownSymbol(#[error(not(source))] pub String);

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Mark {
    /// Mark X (opens the game).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Canonical symbol used on the wire and in rendered pages.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Mark {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "✕" | "×" => Ok(Mark::X),
            "O" | "〇" | "○" => Ok(Mark::O),
            other => Err(UnknownSymbol(other.to_string())),
        }
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.symbol().to_string()
    }
}

impl TryFrom<String> for Mark {
    type Error = UnknownSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
    /// Closed after a win; never played.
    Blocked,
}

impl Cell {
    /// Symbol for this cell ("" when empty).
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(mark) => mark.symbol(),
            Cell::Blocked => BLOCKED_SYMBOL,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

impl FromStr for Cell {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Cell::Empty),
            BLOCKED_SYMBOL => Ok(Cell::Blocked),
            other => other.parse().map(Cell::Occupied),
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.symbol().to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = UnknownSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The turn that was just played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Turn {
    /// No move has been played yet.
    #[default]
    NotStarted,
    /// The given mark just moved.
    Played(Mark),
}

impl Turn {
    /// Returns the mark that just moved, if the game has started.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Turn::NotStarted => None,
            Turn::Played(mark) => Some(mark),
        }
    }

    /// Symbol for this turn ("" before the opening move).
    pub fn symbol(self) -> &'static str {
        match self {
            Turn::NotStarted => "",
            Turn::Played(mark) => mark.symbol(),
        }
    }
}

impl From<Mark> for Turn {
    fn from(mark: Mark) -> Self {
        Turn::Played(mark)
    }
}

impl FromStr for Turn {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Turn::NotStarted);
        }
        s.parse().map(Turn::Played)
    }
}

impl From<Turn> for String {
    fn from(turn: Turn) -> Self {
        turn.symbol().to_string()
    }
}

impl TryFrom<String> for Turn {
    type Error = UnknownSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as three rows of three cell symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "[[Cell; 3]; 3]", from = "[[Cell; 3]; 3]")]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for position in Position::ALL {
            board.set(position, rows[position.row()][position.col()]);
        }
        board
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for position in Position::ALL {
            rows[position.row()][position.col()] = self.get(position);
        }
        rows
    }

    /// Gets the cell at a position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.index()] = cell;
    }

    /// Returns a copy of this board with one cell replaced.
    pub fn with(mut self, position: Position, cell: Cell) -> Self {
        self.set(position, cell);
        self
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Replaces every empty cell with [`Cell::Blocked`].
    pub fn block_empty(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Empty {
                *cell = Cell::Blocked;
            }
        }
    }
}

impl From<[[Cell; 3]; 3]> for Board {
    fn from(rows: [[Cell; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[Cell; 3]; 3] {
    fn from(board: Board) -> Self {
        board.rows()
    }
}
