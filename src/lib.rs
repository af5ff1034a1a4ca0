//! Pointer Tic-Tac-Toe library - a strictly validated 3x3 game engine
//!
//! # Architecture
//!
//! - **Mapper**: pointer coordinates to board cells
//! - **Game**: board, turn order and win/draw detection
//! - **Session**: named players, surface and announcements around a game
//! - **Geometry**: where the grid, marks and win line are drawn
//! - **TUI / Replay**: interactive and headless drivers
//!
//! # Example
//!
//! ```
//! use pointer_tictactoe::{Cell, GameEngine, GameOutcome, Mark, WinLine};
//!
//! let mut game = GameEngine::new();
//! for (row, col, mark) in [(0, 0, Mark::X), (1, 1, Mark::O), (0, 1, Mark::X), (2, 2, Mark::O)] {
//!     game.place(Cell::new(row, col), mark).unwrap();
//! }
//! let outcome = game.place(Cell::new(0, 2), Mark::X).unwrap();
//! assert_eq!(outcome, GameOutcome::Win { mark: Mark::X, line: WinLine::Row(0) });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod game;
pub mod geometry;
mod mapper;
mod replay;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings, capitalize};

// Crate-level exports - Coordinate mapping
pub use mapper::{SurfaceSize, map_to_cell};

// Crate-level exports - Game engine
pub use game::{
    BOARD_SIZE, Board, Cell, GameEngine, GameOutcome, Mark, PlaceError, Placement, Square, WinLine,
};

// Crate-level exports - Sessions and drivers
pub use replay::run_replay;
pub use session::{Match, MoveReport, Players, PointerRelease};
