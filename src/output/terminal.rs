//! Terminal output encoder.
//!
//! Prints a window of the grid one cell per character:
//! - ASCII: `#` painted, `.` empty, `*` reference line endpoint
//! - ANSI: two-space blocks with 24-bit background colors from the theme

use crate::geometry::{GridCell, LineRequest};
use crate::grid::Grid;
use crate::render::{Rgba, Theme};
use crate::session::Session;
use std::collections::HashSet;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain characters (widest compatibility)
    #[default]
    Ascii,
    /// Colored blocks with ANSI 24-bit color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    max_width: u32,
    window: Option<(GridCell, GridCell)>,
    markers: bool,
    theme: Theme,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    const PAINTED: char = '#';
    const EMPTY: char = '.';
    const MARKER: char = '*';

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            max_width: 80,
            window: None,
            markers: true,
            theme: Theme::default(),
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cap the number of columns printed.
    #[must_use]
    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = width.max(1);
        self
    }

    /// Print exactly the cells between two corners (inclusive).
    /// If not set, the window hugs whatever was drawn, padded by one cell.
    #[must_use]
    pub fn window(mut self, a: GridCell, b: GridCell) -> Self {
        let lo = GridCell::new(a.x.min(b.x), a.y.min(b.y));
        let hi = GridCell::new(a.x.max(b.x), a.y.max(b.y));
        self.window = Some((lo, hi));
        self
    }

    /// Mark reference line endpoints.
    #[must_use]
    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Colors for [`TerminalMode::AnsiTrueColor`].
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render a grid and its reference lines to a string.
    #[must_use]
    pub fn render(&self, grid: &Grid, reference_lines: &[LineRequest]) -> String {
        let endpoints: HashSet<GridCell> = if self.markers {
            reference_lines
                .iter()
                .flat_map(|l| [l.start, l.end])
                .collect()
        } else {
            HashSet::new()
        };

        let (lo, hi) = self.compute_window(grid, &endpoints);
        let width = (i64::from(hi.x) - i64::from(lo.x) + 1) as usize;
        let height = (i64::from(hi.y) - i64::from(lo.y) + 1) as usize;
        let mut output = String::with_capacity((width * 2 + 1).saturating_mul(height));

        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                let cell = GridCell::new(x, y);
                let marked = endpoints.contains(&cell);
                let painted = grid.contains(cell);
                match self.mode {
                    TerminalMode::Ascii => output.push(if marked {
                        Self::MARKER
                    } else if painted {
                        Self::PAINTED
                    } else {
                        Self::EMPTY
                    }),
                    TerminalMode::AnsiTrueColor => {
                        let color = if marked {
                            self.theme.reference_line
                        } else if painted {
                            self.theme.cell
                        } else {
                            self.theme.background
                        };
                        push_block(&mut output, color);
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }

        output
    }

    /// Render everything a session has drawn.
    #[must_use]
    pub fn render_session(&self, session: &Session) -> String {
        self.render(session.grid(), session.reference_lines())
    }

    /// Write output directly to stdout.
    pub fn print(&self, session: &Session) {
        print!("{}", self.render_session(session));
    }

    fn compute_window(&self, grid: &Grid, endpoints: &HashSet<GridCell>) -> (GridCell, GridCell) {
        let (lo, hi) = match self.window {
            Some(window) => window,
            None => {
                let bounds = grid
                    .painted_bounds()
                    .into_iter()
                    .chain(endpoints.iter().map(|&c| (c, c)))
                    .reduce(|(alo, ahi), (blo, bhi)| {
                        (
                            GridCell::new(alo.x.min(blo.x), alo.y.min(blo.y)),
                            GridCell::new(ahi.x.max(bhi.x), ahi.y.max(bhi.y)),
                        )
                    });
                match bounds {
                    Some((lo, hi)) => (
                        GridCell::new(lo.x.saturating_sub(1), lo.y.saturating_sub(1)),
                        GridCell::new(hi.x.saturating_add(1), hi.y.saturating_add(1)),
                    ),
                    None => {
                        let max = grid.max_coord();
                        (GridCell::ORIGIN, GridCell::new(max, max))
                    }
                }
            }
        };

        let max_hi_x = i64::from(lo.x) + i64::from(self.max_width) - 1;
        let hi_x = i64::from(hi.x).min(max_hi_x) as i32;
        (lo, GridCell::new(hi_x, hi.y))
    }
}

fn push_block(output: &mut String, color: Rgba) {
    let _ = write!(output, "\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Algorithm;

    fn session() -> Session {
        Session::new(Grid::new(200, 10).unwrap())
    }

    #[test]
    fn test_ascii_line_window_hugs_drawing() {
        let mut s = session();
        s.set_algorithm(Algorithm::BresenhamLine);
        s.draw(2, 2, 5, 2);

        let output = TerminalEncoder::new().markers(false).render_session(&s);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["......", ".####.", "......"]);
    }

    #[test]
    fn test_markers_on_endpoints() {
        let mut s = session();
        s.set_algorithm(Algorithm::BresenhamLine);
        s.draw(2, 2, 5, 2);

        let output = TerminalEncoder::new().render_session(&s);
        assert_eq!(output.lines().nth(1), Some(".*##*."));
    }

    #[test]
    fn test_explicit_window() {
        let mut grid = Grid::new(200, 10).unwrap();
        grid.add_cell(1, 1);
        let output = TerminalEncoder::new()
            .window(GridCell::new(2, 2), GridCell::new(0, 0))
            .render(&grid, &[]);
        assert_eq!(output, "...\n.#.\n...\n");
    }

    #[test]
    fn test_empty_grid_prints_whole_grid() {
        let grid = Grid::new(50, 10).unwrap();
        let output = TerminalEncoder::new().render(&grid, &[]);
        assert_eq!(output.lines().count(), 5);
        assert!(output.lines().all(|l| l == "....."));
    }

    #[test]
    fn test_width_is_capped() {
        let mut s = session();
        s.set_algorithm(Algorithm::Dda);
        s.draw(0, 0, 19, 0);

        let output = TerminalEncoder::new().max_width(8).render_session(&s);
        assert!(output.lines().all(|l| l.chars().count() == 8));
    }

    #[test]
    fn test_circle_mirrors_around_center() {
        let mut s = session();
        s.set_algorithm(Algorithm::BresenhamCircle);
        s.draw(5, 5, 5, 7);

        let output = TerminalEncoder::new().markers(false).render_session(&s);
        let rows: Vec<&str> = output.lines().collect();
        // Window is 3..=7 padded to 2..=8 on both axes.
        assert_eq!(rows.len(), 7);
        for (row, mirrored) in rows.iter().zip(rows.iter().rev()) {
            assert_eq!(row, mirrored);
            let reversed: String = row.chars().rev().collect();
            assert_eq!(*row, reversed);
        }
    }

    #[test]
    fn test_ansi_mode_uses_theme_colors() {
        let mut grid = Grid::new(50, 10).unwrap();
        grid.add_cell(0, 0);
        let output = TerminalEncoder::new()
            .mode(TerminalMode::AnsiTrueColor)
            .window(GridCell::ORIGIN, GridCell::new(1, 0))
            .render(&grid, &[]);
        assert!(output.contains("\x1b[48;2;128;128;128m"));
        assert!(output.contains("\x1b[48;2;255;255;255m"));
        assert!(output.ends_with("\x1b[0m\n"));
    }
}
