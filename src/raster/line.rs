//! Line rasterizers.
//!
//! Three ways to turn a [`LineRequest`] into cells, from the naive
//! slope-intercept baseline to integer-only Bresenham. Each is a small
//! iterator that owns all of its state, so cloning one restarts nothing
//! and shares nothing: two clones walk the same sequence independently.

use super::saturate;
use crate::geometry::{GridCell, LineRequest};
use std::iter::FusedIterator;

fn remaining_hint(remaining: u64) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

// ============================================================================
// Step-by-step (slope-intercept)
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum StepKind {
    /// `x0 == x1`: walk y, x fixed.
    Vertical { x: i32, y: i64, step: i64 },
    /// `y = k*x + b`, x sampled in equal real increments.
    Sloped { x: f64, step_x: f64, k: f64, b: f64 },
}

/// Naive incremental line: derives every y from the line equation.
///
/// The vertical case is handled separately because the slope is undefined.
/// Otherwise `steps = max(|dx|, |dy|)` and x advances from `x0` in `steps`
/// equal real increments; each sample emits `(round(x), round(k*x + b))`,
/// rounding halves to even.
///
/// This is the slowest variant and accumulates floating-point error in x.
/// It exists as the baseline the other algorithms are measured against.
#[derive(Debug, Clone)]
pub struct StepIncremental {
    kind: StepKind,
    remaining: u64,
}

impl StepIncremental {
    /// Start rasterizing `line`.
    #[must_use]
    pub fn new(line: LineRequest) -> Self {
        let (x0, y0) = (i64::from(line.start.x), i64::from(line.start.y));
        let (x1, y1) = (i64::from(line.end.x), i64::from(line.end.y));
        let remaining = line.sample_count();

        let kind = if x0 == x1 {
            StepKind::Vertical {
                x: line.start.x,
                y: y0,
                step: if y1 > y0 { 1 } else { -1 },
            }
        } else {
            let k = (y1 - y0) as f64 / (x1 - x0) as f64;
            let b = y0 as f64 - k * x0 as f64;
            let steps = (remaining - 1) as f64;
            StepKind::Sloped {
                x: x0 as f64,
                step_x: (x1 - x0) as f64 / steps,
                k,
                b,
            }
        };

        Self { kind, remaining }
    }
}

impl Iterator for StepIncremental {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = match &mut self.kind {
            StepKind::Vertical { x, y, step } => {
                let cell = GridCell::new(*x, saturate(*y));
                *y += *step;
                cell
            }
            StepKind::Sloped { x, step_x, k, b } => {
                let y = (*k * *x + *b).round_ties_even();
                let cell = GridCell::new(x.round_ties_even() as i32, y as i32);
                *x += *step_x;
                cell
            }
        };
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.remaining)
    }
}

impl FusedIterator for StepIncremental {}

// ============================================================================
// DDA
// ============================================================================

/// Digital Differential Analyzer.
///
/// Both axes advance by a constant real increment per sample, one of them
/// by exactly one cell. Still floating point, still rounds every sample
/// (halves to even), but never evaluates the line equation.
#[derive(Debug, Clone)]
pub struct Dda {
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    remaining: u64,
}

impl Dda {
    /// Start rasterizing `line`.
    #[must_use]
    pub fn new(line: LineRequest) -> Self {
        let (x0, y0) = (f64::from(line.start.x), f64::from(line.start.y));
        let (x1, y1) = (f64::from(line.end.x), f64::from(line.end.y));
        let remaining = line.sample_count();
        let steps = (remaining - 1) as f64;

        // A single sample never reads the increments.
        let (dx, dy) = if line.is_point() {
            (0.0, 0.0)
        } else {
            ((x1 - x0) / steps, (y1 - y0) / steps)
        };

        Self {
            x: x0,
            y: y0,
            dx,
            dy,
            remaining,
        }
    }
}

impl Iterator for Dda {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = GridCell::new(
            self.x.round_ties_even() as i32,
            self.y.round_ties_even() as i32,
        );
        self.x += self.dx;
        self.y += self.dy;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        remaining_hint(self.remaining)
    }
}

impl FusedIterator for Dda {}

// ============================================================================
// Bresenham
// ============================================================================

/// Bresenham's line algorithm, integer arithmetic only.
///
/// Terminates on reaching the end point rather than by counting steps.
/// Both axes may advance in one iteration (a diagonal move).
///
/// Ties in the error term are broken toward the smaller coordinate on
/// each axis: a step in the negative direction uses a non-strict
/// comparison. Lines traversed in opposite directions therefore cover the
/// same cells. For lines running toward +x and +y the output equals the
/// textbook formulation.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    lx: i64,
    ly: i64,
    error: i64,
    done: bool,
}

impl BresenhamLine {
    /// Start rasterizing `line`.
    #[must_use]
    pub fn new(line: LineRequest) -> Self {
        let (x0, y0) = (i64::from(line.start.x), i64::from(line.start.y));
        let (x1, y1) = (i64::from(line.end.x), i64::from(line.end.y));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            lx: if x0 < x1 { 1 } else { -1 },
            ly: if y0 < y1 { 1 } else { -1 },
            error: dx - dy,
            done: false,
        }
    }

    fn step(&mut self) {
        let e2 = 2 * self.error;

        let step_x = if self.lx > 0 {
            e2 > -self.dy
        } else {
            e2 >= -self.dy
        };
        let step_y = if self.ly > 0 {
            e2 < self.dx
        } else {
            e2 <= self.dx
        };

        if step_x {
            self.error -= self.dy;
            self.x += self.lx;
        }
        if step_y {
            self.error += self.dx;
            self.y += self.ly;
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.done {
            return None;
        }

        // Every coordinate visited lies between the two i32 endpoints.
        let cell = GridCell::new(self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
        } else {
            self.step();
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (self.x1 - self.x)
            .unsigned_abs()
            .max((self.y1 - self.y).unsigned_abs());
        remaining_hint(left + 1)
    }
}

impl FusedIterator for BresenhamLine {}
