//! First-class placement actions for tic-tac-toe.
//!
//! A placement is a domain event: a mark put on a cell. It can be
//! validated before it is applied and replayed from history.

use super::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed on a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Placement {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub cell: Cell,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Reason a placement was rejected.
///
/// Every variant is an ordinary outcome: the engine state is untouched and
/// the caller may ignore it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PlaceError {
    /// The game has already finished.
    #[display("Game is already finished")]
    GameAlreadyFinished,

    /// The mark does not match the current turn.
    #[display("It's {expected}'s turn, not {found}'s")]
    WrongTurn {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that attempted to move.
        found: Mark,
    },

    /// The cell lies outside the 3x3 grid.
    #[display("Cell {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Cell),

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Cell),
}
