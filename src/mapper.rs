//! Grid <-> canvas coordinate mapping.
//!
//! Grid coordinates are integer cell indices; canvas coordinates are
//! positions on the drawing surface, `cell_size` canvas units per cell.

use crate::geometry::{CanvasPoint, GridCell};

/// Pure conversions between grid and canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    cell_size: u32,
}

impl CoordinateMapper {
    /// Create a mapper for cells of `cell_size` canvas units.
    ///
    /// A zero cell size is raised to one so every conversion stays finite.
    #[must_use]
    pub const fn new(cell_size: u32) -> Self {
        let cell_size = if cell_size == 0 { 1 } else { cell_size };
        Self { cell_size }
    }

    /// Size of one cell in canvas units.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas position of the top-left corner of grid coordinate `g`.
    #[must_use]
    pub fn to_canvas(&self, g: i32) -> f32 {
        (i64::from(g) * i64::from(self.cell_size)) as f32
    }

    /// Canvas position of the center of grid coordinate `g`.
    ///
    /// The half-cell offset uses integer division, so odd cell sizes land
    /// on the lower pixel of the middle pair.
    #[must_use]
    pub fn to_canvas_center(&self, g: i32) -> f32 {
        let offset = i64::from(self.cell_size / 2);
        (i64::from(g) * i64::from(self.cell_size) + offset) as f32
    }

    /// Grid coordinate containing canvas position `c` (floor division).
    #[must_use]
    pub fn to_grid(&self, c: f32) -> i32 {
        (c / self.cell_size as f32).floor() as i32
    }

    /// Top-left corner of `cell` on the canvas.
    #[must_use]
    pub fn cell_origin(&self, cell: GridCell) -> CanvasPoint {
        CanvasPoint::new(self.to_canvas(cell.x), self.to_canvas(cell.y))
    }

    /// Center of `cell` on the canvas.
    #[must_use]
    pub fn cell_center(&self, cell: GridCell) -> CanvasPoint {
        CanvasPoint::new(self.to_canvas_center(cell.x), self.to_canvas_center(cell.y))
    }

    /// Cell under a canvas point.
    #[must_use]
    pub fn cell_at(&self, point: CanvasPoint) -> GridCell {
        GridCell::new(self.to_grid(point.x), self.to_grid(point.y))
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(crate::grid::DEFAULT_CELL_SIZE)
    }
}
