//! Surface geometry for drawing the grid, marks and win indicator.
//!
//! All coordinates are in surface units with the origin at the top-left
//! corner and `y` growing downwards.

use crate::game::{BOARD_SIZE, Cell, WinLine};
use crate::mapper::SurfaceSize;
use serde::{Deserialize, Serialize};

/// Fraction of a cell a mark occupies along each axis.
pub const MARK_SCALE: f64 = 0.8;

/// A point on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// An axis-aligned box a mark is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkBox {
    /// Top-left corner.
    pub origin: Point,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl MarkBox {
    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }
}

fn extents(surface: SurfaceSize) -> (f64, f64) {
    (f64::from(surface.width()), f64::from(surface.height()))
}

/// The four lines separating the cells: two vertical, then two horizontal.
pub fn grid_lines(surface: SurfaceSize) -> [Segment; 4] {
    let (w, h) = extents(surface);
    let n = BOARD_SIZE as f64;
    let vertical = |i: f64| Segment::new(Point::new(w * i / n, 0.0), Point::new(w * i / n, h));
    let horizontal = |i: f64| Segment::new(Point::new(0.0, h * i / n), Point::new(w, h * i / n));
    [vertical(1.0), vertical(2.0), horizontal(1.0), horizontal(2.0)]
}

/// The box a mark at `cell` is drawn into.
///
/// The mark spans 80% of the cell, inset by a tenth of the cell from its
/// top-left corner.
pub fn mark_box(cell: Cell, surface: SurfaceSize) -> MarkBox {
    let (w, h) = extents(surface);
    let n = BOARD_SIZE as f64;
    let (cell_w, cell_h) = (w / n, h / n);
    let inset = (1.0 - MARK_SCALE) / 2.0;
    MarkBox {
        origin: Point::new(
            cell_w * cell.col as f64 + cell_w * inset,
            cell_h * cell.row as f64 + cell_h * inset,
        ),
        width: cell_w * MARK_SCALE,
        height: cell_h * MARK_SCALE,
    }
}

/// The segment drawn through a winning line.
///
/// Rows and columns are struck through the middle of their cells across
/// the whole surface; diagonals run corner to corner.
pub fn win_segment(line: WinLine, surface: SurfaceSize) -> Segment {
    let (w, h) = extents(surface);
    let n = BOARD_SIZE as f64;
    match line {
        WinLine::Row(r) => {
            let y = h * r as f64 / n + h / (2.0 * n);
            Segment::new(Point::new(0.0, y), Point::new(w, y))
        }
        WinLine::Column(c) => {
            let x = w * c as f64 / n + w / (2.0 * n);
            Segment::new(Point::new(x, 0.0), Point::new(x, h))
        }
        WinLine::DiagonalMain => Segment::new(Point::new(0.0, 0.0), Point::new(w, h)),
        WinLine::DiagonalAnti => Segment::new(Point::new(w, 0.0), Point::new(0.0, h)),
    }
}
