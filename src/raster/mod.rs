//! Rasterization algorithms.
//!
//! Converts continuous geometry into the exact cells to paint.
//!
//! # Algorithms
//!
//! - **Step-by-step**: slope-intercept baseline, one rounding per sample
//! - **DDA**: constant real increments on both axes
//! - **Bresenham's Line**: integer error term, no floating point
//! - **Bresenham's Circle**: midpoint decision variable, eight-way symmetry
//!
//! Every algorithm is a lazy iterator of [`GridCell`]s. Nothing here knows
//! about the [`Grid`](crate::grid::Grid); cells reach storage through the
//! [`CellSink`] trait.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs."

mod algorithm;
mod circle;
mod line;

pub use algorithm::{Algorithm, Cells};
pub use circle::BresenhamCircle;
pub use line::{BresenhamLine, Dda, StepIncremental};

use crate::geometry::GridCell;
use std::collections::{BTreeSet, HashSet};

/// Anything that can receive painted cells.
pub trait CellSink {
    /// Receive one cell. Repeats are allowed.
    fn paint_cell(&mut self, cell: GridCell);

    /// Drain `cells` into this sink. Returns how many cells were emitted,
    /// counting repeats.
    fn paint<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = GridCell>,
        Self: Sized,
    {
        let mut emitted = 0;
        for cell in cells {
            self.paint_cell(cell);
            emitted += 1;
        }
        emitted
    }
}

impl CellSink for Vec<GridCell> {
    fn paint_cell(&mut self, cell: GridCell) {
        self.push(cell);
    }
}

impl CellSink for HashSet<GridCell> {
    fn paint_cell(&mut self, cell: GridCell) {
        self.insert(cell);
    }
}

impl CellSink for BTreeSet<GridCell> {
    fn paint_cell(&mut self, cell: GridCell) {
        self.insert(cell);
    }
}

impl<S: CellSink + ?Sized> CellSink for &mut S {
    fn paint_cell(&mut self, cell: GridCell) {
        (**self).paint_cell(cell);
    }
}

/// Clamp an `i64` coordinate into `i32` range.
#[inline]
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LineRequest;

    #[test]
    fn test_paint_counts_repeats() {
        let mut set = HashSet::new();
        let emitted = set.paint([
            GridCell::new(1, 1),
            GridCell::new(1, 1),
            GridCell::new(2, 1),
        ]);
        assert_eq!(emitted, 3);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut out = Vec::new();
        out.paint(BresenhamLine::new(LineRequest::from_coords(0, 0, 2, 0)));
        assert_eq!(
            out,
            vec![GridCell::new(0, 0), GridCell::new(1, 0), GridCell::new(2, 0)]
        );
    }

    #[test]
    fn test_borrowed_sink() {
        fn fill<S: CellSink>(mut sink: S) -> usize {
            sink.paint(Dda::new(LineRequest::from_coords(0, 0, 0, 3)))
        }

        let mut set = BTreeSet::new();
        assert_eq!(fill(&mut set), 4);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(5), 5);
        assert_eq!(saturate(i64::MAX), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
    }
}
