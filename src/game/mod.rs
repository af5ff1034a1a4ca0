//! Tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board and turn, validates placements through
//! [`contracts`] and reports a [`GameOutcome`] computed by [`rules`].

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod outcome;
pub mod rules;
mod types;

pub use action::{PlaceError, Placement};
pub use engine::GameEngine;
pub use outcome::GameOutcome;
pub use rules::WinLine;
pub use types::{BOARD_SIZE, Board, Cell, Mark, Square};
