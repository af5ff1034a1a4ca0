//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. They are kept apart from the
//! engine so the contract checks and tests can call them directly.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WinLine, detect_outcome, winning_line};
