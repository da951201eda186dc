//! Addressable cell grid.
//!
//! A square drawing surface `extent` canvas units wide, divided into cells
//! of `cell_size` units. The grid only remembers which cells are painted;
//! it never renders them.

use crate::error::{Error, Result};
use crate::geometry::{GridCell, Rect};
use crate::mapper::CoordinateMapper;
use crate::raster::CellSink;
use std::collections::hash_set;
use std::collections::HashSet;

/// Default extent along each axis, in canvas units.
pub const DEFAULT_EXTENT: u32 = 2500;

/// Default size of one cell, in canvas units.
pub const DEFAULT_CELL_SIZE: u32 = 25;

/// Most cells per axis a grid may have; every coordinate must fit in `i32`.
pub const MAX_COLUMNS: u32 = i32::MAX as u32;

/// Set of painted cells over a fixed-extent grid.
///
/// Painting is idempotent and accepts any coordinates, including ones
/// outside `[0, columns)`. Bounds are the caller's business; see
/// [`Grid::in_bounds`].
#[derive(Debug, Clone)]
pub struct Grid {
    /// Extent along each axis, in canvas units.
    extent: u32,
    /// Size of one cell, in canvas units.
    cell_size: u32,
    cells: HashSet<GridCell>,
    /// Bumped on every change to `cells`.
    revision: u64,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, a cell is larger
    /// than the whole grid, or there are more than [`MAX_COLUMNS`] cells
    /// per axis.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterlab::grid::Grid;
    ///
    /// let grid = Grid::new(2500, 25).unwrap();
    /// assert_eq!(grid.columns(), 100);
    /// assert_eq!(grid.cell_count(), 0);
    /// ```
    pub fn new(extent: u32, cell_size: u32) -> Result<Self> {
        let positive = extent > 0 && cell_size > 0 && cell_size <= extent;
        if !positive || extent / cell_size > MAX_COLUMNS {
            return Err(Error::InvalidDimensions { extent, cell_size });
        }

        Ok(Self {
            extent,
            cell_size,
            cells: HashSet::new(),
            revision: 0,
        })
    }

    /// Extent along each axis, in canvas units.
    #[must_use]
    pub const fn extent(&self) -> u32 {
        self.extent
    }

    /// Size of one cell, in canvas units.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of addressable cells along each axis.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.extent / self.cell_size
    }

    /// Largest addressable coordinate on either axis.
    #[must_use]
    pub const fn max_coord(&self) -> i32 {
        // 1 <= columns() <= MAX_COLUMNS, checked in new().
        (self.columns() - 1) as i32
    }

    /// Whether `cell` lies inside the addressable area.
    #[must_use]
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        let range = 0..=self.max_coord();
        range.contains(&cell.x) && range.contains(&cell.y)
    }

    /// Mapper for this grid's cell size.
    #[must_use]
    pub const fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.cell_size)
    }

    /// Canvas-space rectangle covering the whole grid.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.extent as f32, self.extent as f32)
    }

    /// Paint the cell at `(x, y)`. Returns `true` if it was not painted before.
    pub fn add_cell(&mut self, x: i32, y: i32) -> bool {
        self.insert(GridCell::new(x, y))
    }

    /// Paint `cell`. Returns `true` if it was not painted before.
    pub fn insert(&mut self, cell: GridCell) -> bool {
        let inserted = self.cells.insert(cell);
        if inserted {
            self.revision += 1;
        }
        inserted
    }

    /// Remove every painted cell.
    pub fn clear_cells(&mut self) {
        if !self.cells.is_empty() {
            self.cells.clear();
            self.revision += 1;
        }
    }

    /// Number of painted cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is painted.
    #[must_use]
    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Painted cells, in no particular order.
    pub fn cells(&self) -> hash_set::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Change counter for the painted set.
    ///
    /// Renderers compare this against the revision they last drew to decide
    /// whether a redraw is needed.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Smallest and largest painted coordinates, or `None` when empty.
    #[must_use]
    pub fn painted_bounds(&self) -> Option<(GridCell, GridCell)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        let bounds = iter.fold((first, first), |(lo, hi), c| {
            (
                GridCell::new(lo.x.min(c.x), lo.y.min(c.y)),
                GridCell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        });
        Some(bounds)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            cell_size: DEFAULT_CELL_SIZE,
            cells: HashSet::new(),
            revision: 0,
        }
    }
}

impl CellSink for Grid {
    fn paint_cell(&mut self, cell: GridCell) {
        self.insert(cell);
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a GridCell;
    type IntoIter = hash_set::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}
