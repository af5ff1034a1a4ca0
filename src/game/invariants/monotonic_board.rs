//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: board squares are never overwritten or cleared.
///
/// Verified by replaying the placement history onto an empty board: every
/// placement must land on an empty square and the result must equal the
/// live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for placement in game.history() {
            if !reconstructed.is_empty(placement.cell) {
                return false;
            }
            reconstructed.put(placement.cell, placement.mark);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Mark, Placement};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let placements = [
            Placement::new(Mark::X, Cell::new(0, 0)),
            Placement::new(Mark::O, Cell::new(1, 1)),
            Placement::new(Mark::X, Cell::new(0, 2)),
            Placement::new(Mark::O, Cell::new(2, 0)),
        ];
        let game = GameEngine::replay(&placements).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameEngine::new();
        game.place(Cell::new(1, 1), Mark::X).unwrap();

        game.board.put(Cell::new(1, 1), Mark::O);

        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
