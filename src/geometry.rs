//! Geometric primitives for rasterization.
//!
//! Grid-space types ([`GridCell`], [`LineRequest`], [`CircleRequest`]) and the
//! canvas-space [`Rect`] used to report drawable extents.

use crate::error::{Error, Result};
use std::fmt;

/// One cell of the grid, addressed by integer column and row.
///
/// Coordinates are signed: mirrored circle points near the grid edge can
/// fall outside `[0, columns)`, and the grid stores them anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridCell {
    /// The cell at the origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the number of king-moves between two cells.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy) as u32
    }

    /// Whether `other` is one of the eight neighbours of this cell.
    ///
    /// A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev(other) == 1
    }

    /// Euclidean distance to another cell.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridCell> for (i32, i32) {
    fn from(cell: GridCell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line between two grid cells. Endpoints may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRequest {
    /// First endpoint.
    pub start: GridCell,
    /// Second endpoint.
    pub end: GridCell,
}

impl LineRequest {
    /// Create a line between two cells.
    #[must_use]
    pub const fn new(start: GridCell, end: GridCell) -> Self {
        Self { start, end }
    }

    /// Create a line from raw coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(GridCell::new(x0, y0), GridCell::new(x1, y1))
    }

    /// The same line traversed the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Number of samples every line algorithm emits: `max(|dx|, |dy|) + 1`.
    #[must_use]
    pub fn sample_count(&self) -> u64 {
        u64::from(self.start.chebyshev(self.end)) + 1
    }

    /// Whether both endpoints are the same cell.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

/// A circle given by its center cell and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CircleRequest {
    /// Center cell.
    pub center: GridCell,
    /// Radius in cells.
    pub radius: u32,
}

impl CircleRequest {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] if `radius < 0`.
    pub fn new(center: GridCell, radius: i32) -> Result<Self> {
        let radius = u32::try_from(radius).map_err(|_| Error::NegativeRadius(radius))?;
        Ok(Self { center, radius })
    }

    /// Circle centered at `center` whose radius is the rounded distance to `point`.
    #[must_use]
    pub fn through(center: GridCell, point: GridCell) -> Self {
        let radius = center.distance(point).round() as u32;
        Self { center, radius }
    }
}

/// A point on the drawing surface, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasPoint {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl CanvasPoint {
    /// Create a new canvas point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}
