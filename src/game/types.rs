//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// A cell address as `(row, col)`.
///
/// Construction is unchecked: a cell produced from an out-of-range pointer
/// position may lie off the board, and the engine rejects it on placement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Returns true if the cell lies within the 3x3 grid.
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index (0-8), or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.is_on_board().then_some(self.row * BOARD_SIZE + self.col)
    }

    /// Creates a cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE * BOARD_SIZE).then_some(Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// All nine on-board cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Cell::from_index)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at `cell`, or `None` when off the board.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        self.squares.get(cell.row)?.get(cell.col).copied()
    }

    /// Returns the mark at `cell`, if the cell is on the board and occupied.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.get(cell).and_then(Square::mark)
    }

    /// Checks if the square at `cell` is on the board and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares
            .iter()
            .flatten()
            .all(|square| *square != Square::Empty)
    }

    /// Counts squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Returns the squares as rows.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Writes a mark without any rule checks.
    ///
    /// Callers outside the engine go through `GameEngine::place`.
    pub(crate) fn put(&mut self, cell: Cell, mark: Mark) {
        if let Some(square) = self
            .squares
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        {
            *square = Square::Occupied(mark);
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.squares.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if c < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if r < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_index_roundtrip_corners() {
        assert_eq!(Cell::new(0, 0).index(), Some(0));
        assert_eq!(Cell::new(1, 1).index(), Some(4));
        assert_eq!(Cell::new(2, 2).index(), Some(8));
        assert_eq!(Cell::from_index(5), Some(Cell::new(1, 2)));
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_off_board_cell() {
        assert!(!Cell::new(3, 0).is_on_board());
        assert!(!Cell::new(0, 3).is_on_board());
        assert_eq!(Cell::new(0, 7).index(), None);
    }

    #[test]
    fn test_all_cells() {
        assert_eq!(Cell::all().count(), 9);
    }

    #[test]
    fn test_board_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(Cell::new(3, 3)), None);
        assert!(!board.is_empty(Cell::new(0, 3)));
    }

    #[test]
    fn test_board_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for cell in Cell::all() {
            board.put(cell, Mark::X);
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 9);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.put(Cell::new(0, 0), Mark::X);
        board.put(Cell::new(1, 1), Mark::O);
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
