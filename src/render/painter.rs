//! Grid painter: turns a [`Grid`] into pixels.

use super::{Canvas, Rgba};
use crate::error::Result;
use crate::geometry::{GridCell, LineRequest};
use crate::grid::Grid;
use crate::raster::BresenhamLine;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Length of the tick marks along each axis, in pixels.
const TICK_LENGTH: u32 = 3;

/// Colors used when painting a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas background.
    pub background: Rgba,
    /// Lines between cells.
    pub grid_line: Rgba,
    /// Axes and tick marks along the top and left edges.
    pub axis: Rgba,
    /// Fill of painted cells.
    pub cell: Rgba,
    /// The ideal center-to-center segment of each draw.
    pub reference_line: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            grid_line: Rgba::LIGHT_GRAY,
            axis: Rgba::BLACK,
            cell: Rgba::GRAY,
            reference_line: Rgba::BLUE,
        }
    }
}

/// Paints grids onto an `extent x extent` canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPainter {
    theme: Theme,
}

impl GridPainter {
    /// Create a painter with the given colors.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Colors in use.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Paint the grid, its cells and the given reference lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated.
    pub fn render(&self, grid: &Grid, reference_lines: &[LineRequest]) -> Result<Canvas> {
        let mut canvas = Canvas::new(grid.extent(), grid.extent())?;
        canvas.clear(self.theme.background);

        let hidden = self.paint_cells(&mut canvas, grid);
        self.paint_grid_lines(&mut canvas, grid);
        self.paint_axes(&mut canvas, grid);
        for line in reference_lines {
            self.paint_reference_line(&mut canvas, grid, *line);
        }

        log::trace!(
            "rendered {} cells ({} off canvas) and {} reference lines at revision {}",
            grid.cell_count() - hidden,
            hidden,
            reference_lines.len(),
            grid.revision()
        );
        Ok(canvas)
    }

    /// Paint everything a session has drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated.
    pub fn render_session(&self, session: &Session) -> Result<Canvas> {
        self.render(session.grid(), session.reference_lines())
    }

    /// Fill painted cells. Returns how many lie entirely off the canvas.
    fn paint_cells(&self, canvas: &mut Canvas, grid: &Grid) -> usize {
        let mapper = grid.mapper();
        let size = grid.cell_size();
        let bounds = grid.bounding_rect();
        let mut hidden = 0;
        for cell in grid {
            let origin = mapper.cell_origin(*cell);
            // Grid-aligned: an origin outside the extent leaves no pixel visible.
            if !bounds.contains(origin) {
                hidden += 1;
                continue;
            }
            let (x, y) = (origin.x as i64, origin.y as i64);
            canvas.fill_rect(x, y, size, size, self.theme.cell);
        }
        hidden
    }

    fn paint_grid_lines(&self, canvas: &mut Canvas, grid: &Grid) {
        let extent = grid.extent();
        for i in (0..extent).step_by(grid.cell_size() as usize) {
            let i = i64::from(i);
            canvas.fill_rect(i, 0, 1, extent, self.theme.grid_line);
            canvas.fill_rect(0, i, extent, 1, self.theme.grid_line);
        }
    }

    fn paint_axes(&self, canvas: &mut Canvas, grid: &Grid) {
        let extent = grid.extent();
        canvas.fill_rect(0, 0, 1, extent, self.theme.axis);
        canvas.fill_rect(0, 0, extent, 1, self.theme.axis);

        for i in (0..extent).step_by(grid.cell_size() as usize) {
            let i = i64::from(i);
            canvas.fill_rect(0, i, TICK_LENGTH, 1, self.theme.axis);
            canvas.fill_rect(i, 0, 1, TICK_LENGTH, self.theme.axis);
        }
    }

    fn paint_reference_line(&self, canvas: &mut Canvas, grid: &Grid, line: LineRequest) {
        let mapper = grid.mapper();
        let to_pixel = |cell: GridCell| {
            let p = mapper.cell_center(cell);
            GridCell::new(p.x as i32, p.y as i32)
        };

        let pixels = LineRequest::new(to_pixel(line.start), to_pixel(line.end));
        for p in BresenhamLine::new(pixels) {
            canvas.set_pixel(i64::from(p.x), i64::from(p.y), self.theme.reference_line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(100, 10).unwrap()
    }

    #[test]
    fn test_empty_grid_background_and_lines() {
        let canvas = GridPainter::default().render(&grid(), &[]).unwrap();
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(20, 55), Some(Rgba::LIGHT_GRAY));
        assert_eq!(canvas.get_pixel(55, 20), Some(Rgba::LIGHT_GRAY));
        assert_eq!(canvas.get_pixel(0, 50), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(50, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_tick_marks() {
        let canvas = GridPainter::default().render(&grid(), &[]).unwrap();
        assert_eq!(canvas.get_pixel(2, 30), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(3, 30), Some(Rgba::LIGHT_GRAY));
    }

    #[test]
    fn test_painted_cell_interior() {
        let mut g = grid();
        g.add_cell(2, 3);
        let canvas = GridPainter::default().render(&g, &[]).unwrap();
        assert_eq!(canvas.get_pixel(25, 35), Some(Rgba::GRAY));
        assert_eq!(canvas.get_pixel(35, 35), Some(Rgba::WHITE));
        // Cell borders stay grid lines.
        assert_eq!(canvas.get_pixel(20, 35), Some(Rgba::LIGHT_GRAY));
    }

    #[test]
    fn test_out_of_extent_cells_are_clipped() {
        let mut g = grid();
        g.add_cell(-1, -1);
        g.add_cell(50, 50);
        let canvas = GridPainter::default().render(&g, &[]).unwrap();
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(95, 95), Some(Rgba::WHITE));
    }

    #[test]
    fn test_reference_line_passes_through_centers() {
        let line = LineRequest::from_coords(1, 1, 5, 1);
        let canvas = GridPainter::default().render(&grid(), &[line]).unwrap();
        // Centers are at 15 and 55 on row 15.
        assert_eq!(canvas.get_pixel(15, 15), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(33, 15), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(55, 15), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(56, 15), Some(Rgba::WHITE));
    }

    #[test]
    fn test_custom_theme() {
        let theme = Theme {
            cell: Rgba::RED,
            ..Theme::default()
        };
        let mut g = grid();
        g.add_cell(0, 0);
        let canvas = GridPainter::new(theme).render(&g, &[]).unwrap();
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::RED));
    }

    #[test]
    fn test_render_session() {
        let mut session = Session::new(grid());
        session.draw(0, 0, 9, 9);
        let canvas = GridPainter::default().render_session(&session).unwrap();
        // Diagonal through (4, 4): interior pixel is under the blue line.
        assert_eq!(canvas.get_pixel(45, 45), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(47, 43), Some(Rgba::GRAY));
    }
}
