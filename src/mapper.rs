//! Pointer coordinates to board cells.

use crate::config::ConfigError;
use crate::game::{BOARD_SIZE, Cell};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::instrument;

/// Logical dimensions of the surface the grid spans.
///
/// Both sides are positive; a zero side is rejected when the surface is
/// built from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl SurfaceSize {
    /// Creates a surface size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either side is zero.
    #[track_caller]
    #[instrument]
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(ConfigError::new(format!(
                "Surface dimensions must be positive, got {}x{}",
                width, height
            ))),
        }
    }

    /// Surface width.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Surface height.
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Returns true if `(x, y)` lies on the surface.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Maps a pointer position on this surface to a cell.
    pub fn cell_at(&self, x: u32, y: u32) -> Cell {
        map_to_cell(x, y, *self)
    }
}

impl std::fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Maps a pointer position to the cell whose third of the surface it falls in.
///
/// `row = floor(3 * y / H)` and `col = floor(3 * x / W)`. Positions inside
/// the surface always land on the board; positions outside are not clamped
/// and yield an off-board cell, which the engine rejects on placement.
#[instrument]
pub fn map_to_cell(x: u32, y: u32, surface: SurfaceSize) -> Cell {
    Cell::new(
        scale(y, surface.height()),
        scale(x, surface.width()),
    )
}

fn scale(coordinate: u32, extent: u32) -> usize {
    let index = BOARD_SIZE as u64 * u64::from(coordinate) / u64::from(extent);
    usize::try_from(index).unwrap_or(usize::MAX)
}
