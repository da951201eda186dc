//! # Rasterlab
//!
//! Discrete line and circle rasterization on a square cell grid.
//!
//! Four algorithms turn a pair of cell coordinates into the cells that
//! approximate the ideal shape between them, so their output and timing
//! can be compared side by side.
//!
//! ## Features
//!
//! - **Step-by-step**: slope-intercept stepping along the major axis
//! - **DDA**: floating point increments along both axes
//! - **Bresenham**: integer-only line with a reversal-symmetric tie rule
//! - **Bresenham circle**: midpoint circle with 8-way symmetry
//! - **Outputs**: PNG images and terminal (ASCII/ANSI) views of the grid
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterlab::prelude::*;
//!
//! let mut session = Session::new(Grid::new(250, 25)?);
//! session.set_algorithm(Algorithm::BresenhamLine);
//!
//! let report = session.draw(0, 0, 6, 2);
//! assert_eq!(report.cells_emitted, 7);
//! println!("{report}");
//!
//! let canvas = GridPainter::default().render_session(&session)?;
//! let png = PngEncoder::to_bytes(&canvas)?;
//! assert!(!png.is_empty());
//! # Ok::<(), rasterlab::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal* 4(1).
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Cell coordinates, shape requests and canvas geometry.
pub mod geometry;

/// Conversion between grid coordinates and canvas units.
pub mod mapper;

/// The set of painted cells.
pub mod grid;

// ============================================================================
// Rasterization
// ============================================================================

/// Line and circle rasterization algorithms.
pub mod raster;

/// Interactive drawing state (algorithm choice, timing, reference lines).
pub mod session;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Pixel canvas and grid painter.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Configuration and Errors
// ============================================================================

/// YAML configuration.
pub mod config;

/// Error types for rasterlab operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use rasterlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CircleRequest, GridCell, LineRequest};
    pub use crate::grid::Grid;
    pub use crate::mapper::CoordinateMapper;
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{
        Algorithm, BresenhamCircle, BresenhamLine, CellSink, Cells, Dda, StepIncremental,
    };
    pub use crate::render::{Canvas, GridPainter, Rgba, Theme};
    pub use crate::session::{DrawReport, Session};
}
