//! Software rendering of grids.
//!
//! Paints grid lines, axes, painted cells and the ideal reference line of
//! each draw into a [`Canvas`]. Nothing here decides which cells are
//! painted; that is the rasterizer's job.

mod canvas;
mod color;
mod painter;

pub use canvas::Canvas;
pub use color::Rgba;
pub use painter::{GridPainter, Theme};
