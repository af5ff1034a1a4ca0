//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is a draw: every square occupied and no line
/// completed by either mark.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && winning_line(board, Mark::X).is_none()
        && winning_line(board, Mark::O).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.put(Cell::new(r, c), Mark::X),
                    'O' => board.put(Cell::new(r, c), Mark::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["XXX", "OOX", "OXO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
