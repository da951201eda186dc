//! Algorithm selection and dispatch.

use super::{BresenhamCircle, BresenhamLine, Dda, StepIncremental};
use crate::error::Error;
use crate::geometry::{CircleRequest, GridCell, LineRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// The rasterization procedure used for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Slope-intercept stepping (baseline).
    #[default]
    #[serde(rename = "step", alias = "step-incremental")]
    StepIncremental,
    /// Digital Differential Analyzer.
    #[serde(rename = "dda")]
    Dda,
    /// Bresenham's integer line.
    #[serde(rename = "bresenham", alias = "bresenham-line")]
    BresenhamLine,
    /// Bresenham's midpoint circle.
    #[serde(rename = "circle", alias = "bresenham-circle")]
    BresenhamCircle,
}

impl Algorithm {
    /// Every variant, in menu order.
    pub const ALL: [Self; 4] = [
        Self::StepIncremental,
        Self::Dda,
        Self::BresenhamLine,
        Self::BresenhamCircle,
    ];

    /// Short name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StepIncremental => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham",
            Self::BresenhamCircle => "circle",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StepIncremental => "Step-by-step",
            Self::Dda => "DDA",
            Self::BresenhamLine => "Bresenham",
            Self::BresenhamCircle => "Bresenham (circle)",
        }
    }

    /// Whether this variant draws a line between its two points.
    #[must_use]
    pub const fn is_line(self) -> bool {
        !matches!(self, Self::BresenhamCircle)
    }

    /// Rasterize using two user points.
    ///
    /// Line variants connect `start` and `end`. The circle variant treats
    /// `start` as the center and `end` as a point on the circumference.
    #[must_use]
    pub fn trace(self, start: GridCell, end: GridCell) -> Cells {
        let line = LineRequest::new(start, end);
        match self {
            Self::StepIncremental => Cells::Step(StepIncremental::new(line)),
            Self::Dda => Cells::Dda(Dda::new(line)),
            Self::BresenhamLine => Cells::Bresenham(BresenhamLine::new(line)),
            Self::BresenhamCircle => {
                Cells::Circle(BresenhamCircle::new(CircleRequest::through(start, end)))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" | "step-incremental" | "naive" => Ok(Self::StepIncremental),
            "dda" => Ok(Self::Dda),
            "bresenham" | "bresenham-line" => Ok(Self::BresenhamLine),
            "circle" | "bresenham-circle" | "midpoint" => Ok(Self::BresenhamCircle),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Cells produced by whichever [`Algorithm`] was selected.
#[derive(Debug, Clone)]
pub enum Cells {
    /// From [`StepIncremental`].
    Step(StepIncremental),
    /// From [`Dda`].
    Dda(Dda),
    /// From [`BresenhamLine`].
    Bresenham(BresenhamLine),
    /// From [`BresenhamCircle`].
    Circle(BresenhamCircle),
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        match self {
            Self::Step(it) => it.next(),
            Self::Dda(it) => it.next(),
            Self::Bresenham(it) => it.next(),
            Self::Circle(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Step(it) => it.size_hint(),
            Self::Dda(it) => it.size_hint(),
            Self::Bresenham(it) => it.size_hint(),
            Self::Circle(it) => it.size_hint(),
        }
    }
}

impl FusedIterator for Cells {}
