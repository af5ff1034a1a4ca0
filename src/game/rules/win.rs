//! Win detection logic for tic-tac-toe.

use super::super::{BOARD_SIZE, Board, Cell, GameOutcome, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One of the eight lines that win the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum WinLine {
    /// A horizontal line (0 = top).
    #[display("row {_0}")]
    Row(usize),
    /// A vertical line (0 = left).
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    DiagonalMain,
    /// Top-right to bottom-left.
    #[display("anti diagonal")]
    DiagonalAnti,
}

impl WinLine {
    /// All lines in detection order: rows, columns, main diagonal, anti diagonal.
    pub const ALL: [WinLine; 8] = [
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Column(0),
        WinLine::Column(1),
        WinLine::Column(2),
        WinLine::DiagonalMain,
        WinLine::DiagonalAnti,
    ];

    /// The three cells that make up this line.
    ///
    /// `Row` and `Column` indices of 3 or more produce off-board cells,
    /// which never match a mark.
    pub fn cells(self) -> [Cell; BOARD_SIZE] {
        match self {
            WinLine::Row(r) => [Cell::new(r, 0), Cell::new(r, 1), Cell::new(r, 2)],
            WinLine::Column(c) => [Cell::new(0, c), Cell::new(1, c), Cell::new(2, c)],
            WinLine::DiagonalMain => [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
            WinLine::DiagonalAnti => [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
        }
    }

    /// Returns true if every cell on this line holds `mark`.
    pub fn is_filled_by(self, board: &Board, mark: Mark) -> bool {
        self.cells()
            .iter()
            .all(|cell| board.mark_at(*cell) == Some(mark))
    }
}

/// Returns the first line filled by `mark`, scanning in [`WinLine::ALL`] order.
///
/// When one move completes two lines at once, the earlier line in scan
/// order is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    WinLine::ALL
        .into_iter()
        .find(|line| line.is_filled_by(board, mark))
}

/// Evaluates the board right after `mover` placed a mark.
///
/// Only the mover's lines are examined. Under strict alternation the
/// opponent cannot have completed a line on the mover's turn, since that
/// would have ended the game on the opponent's previous move.
#[instrument(skip(board))]
pub fn detect_outcome(board: &Board, mover: Mark) -> GameOutcome {
    if let Some(line) = winning_line(board, mover) {
        trace!(%line, "line completed");
        return GameOutcome::Win { mark: mover, line };
    }

    if board.is_full() {
        return GameOutcome::Draw;
    }

    GameOutcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, mark: Mark, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.put(Cell::new(r, c), mark);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(detect_outcome(&board, Mark::X), GameOutcome::InProgress);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WinLine::ALL {
            let mut board = Board::new();
            for cell in line.cells() {
                board.put(cell, Mark::O);
            }
            assert_eq!(winning_line(&board, Mark::O), Some(line));
            assert_eq!(winning_line(&board, Mark::X), None);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        place_all(&mut board, Mark::X, &[(0, 0), (0, 1)]);
        assert_eq!(detect_outcome(&board, Mark::X), GameOutcome::InProgress);
    }

    #[test]
    fn test_only_mover_lines_checked() {
        let mut board = Board::new();
        place_all(&mut board, Mark::O, &[(2, 0), (2, 1), (2, 2)]);
        place_all(&mut board, Mark::X, &[(0, 0)]);
        assert_eq!(detect_outcome(&board, Mark::X), GameOutcome::InProgress);
    }

    #[test]
    fn test_double_line_reports_row_first() {
        // X completes row 0 and column 0 with the corner.
        let mut board = Board::new();
        place_all(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);
        assert_eq!(
            detect_outcome(&board, Mark::X),
            GameOutcome::Win {
                mark: Mark::X,
                line: WinLine::Row(0)
            }
        );
    }

    #[test]
    fn test_column_before_diagonal() {
        let mut board = Board::new();
        place_all(&mut board, Mark::O, &[(0, 2), (1, 2), (2, 2), (1, 1), (2, 0)]);
        assert_eq!(winning_line(&board, Mark::O), Some(WinLine::Column(2)));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let mut board = Board::new();
        place_all(&mut board, Mark::X, &[(0, 0), (0, 2), (1, 1), (2, 1), (2, 2)]);
        place_all(&mut board, Mark::O, &[(0, 1), (1, 0), (1, 2), (2, 0)]);
        assert!(board.is_full());
        assert_eq!(
            detect_outcome(&board, Mark::X),
            GameOutcome::Win {
                mark: Mark::X,
                line: WinLine::DiagonalMain
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(WinLine::Row(1).to_string(), "row 1");
        assert_eq!(WinLine::DiagonalAnti.to_string(), "anti diagonal");
    }
}
