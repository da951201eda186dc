//! Headless drawing session.
//!
//! Plays the part of the interactive window: holds the active algorithm,
//! clamps user coordinates into the grid, times each rasterization and
//! keeps the reference lines drawn alongside the cells.

use crate::config::Config;
use crate::error::Result;
use crate::geometry::{GridCell, LineRequest};
use crate::grid::Grid;
use crate::raster::{Algorithm, CellSink};
use std::fmt;
use std::time::{Duration, Instant};

/// Outcome of one [`Session::draw`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawReport {
    /// Algorithm that produced the cells.
    pub algorithm: Algorithm,
    /// First point after clamping.
    pub start: GridCell,
    /// Second point after clamping.
    pub end: GridCell,
    /// Cells yielded by the algorithm, repeats included.
    pub cells_emitted: usize,
    /// Cells that were not painted before this draw.
    pub newly_painted: usize,
    /// Wall-clock time spent rasterizing into the grid.
    pub elapsed: Duration,
}

impl DrawReport {
    /// Elapsed time in microseconds.
    #[must_use]
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6
    }
}

impl fmt::Display for DrawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {:.2} microseconds", self.elapsed_micros())
    }
}

/// A grid plus the controller state that drives it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    grid: Grid,
    algorithm: Algorithm,
    reference_lines: Vec<LineRequest>,
    last_report: Option<DrawReport>,
}

impl Session {
    /// Start a session on `grid` with the default algorithm.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            algorithm: Algorithm::default(),
            reference_lines: Vec::new(),
            last_report: None,
        }
    }

    /// Start a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid dimensions are invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let grid = Grid::new(config.grid.extent, config.grid.cell_size)?;
        let mut session = Self::new(grid);
        session.set_algorithm(config.algorithm);
        Ok(session)
    }

    /// The grid being drawn on.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select the algorithm used by subsequent draws.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Straight center-to-center lines for every draw since the last clear.
    #[must_use]
    pub fn reference_lines(&self) -> &[LineRequest] {
        &self.reference_lines
    }

    /// Report of the most recent draw, if any since the last clear.
    #[must_use]
    pub const fn last_report(&self) -> Option<&DrawReport> {
        self.last_report.as_ref()
    }

    /// Clamp one coordinate into `[0, max_coord]`.
    #[must_use]
    pub fn clamp(&self, v: i32) -> i32 {
        v.clamp(0, self.grid.max_coord())
    }

    /// Draw with the active algorithm.
    ///
    /// Coordinates are clamped into the grid first. For the circle
    /// algorithm `(x0, y0)` is the center and `(x1, y1)` lies on the
    /// circumference.
    pub fn draw(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> DrawReport {
        let start = GridCell::new(self.clamp(x0), self.clamp(y0));
        let end = GridCell::new(self.clamp(x1), self.clamp(y1));
        self.reference_lines.push(LineRequest::new(start, end));

        let algorithm = self.algorithm;
        let before = self.grid.cell_count();

        let timer = Instant::now();
        let cells_emitted = self.grid.paint(algorithm.trace(start, end));
        let elapsed = timer.elapsed();

        let report = DrawReport {
            algorithm,
            start,
            end,
            cells_emitted,
            newly_painted: self.grid.cell_count() - before,
            elapsed,
        };
        log::debug!(
            "{} {} -> {}: {} cells ({} new) in {:.2}us",
            algorithm.label(),
            start,
            end,
            cells_emitted,
            report.newly_painted,
            report.elapsed_micros()
        );

        self.last_report = Some(report);
        report
    }

    /// Remove all cells, reference lines and the last report.
    pub fn clear(&mut self) {
        self.grid.clear_cells();
        self.reference_lines.clear();
        self.last_report = None;
        log::debug!("session cleared");
    }
}
