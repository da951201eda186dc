//! PNG output encoder.

use crate::error::Result;
use crate::render::Canvas;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::encode(canvas, BufWriter::new(file))?;
        log::debug!(
            "wrote {}x{} PNG to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        Ok(())
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(canvas: &Canvas, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.pixels())?;
        writer.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::render::{GridPainter, Rgba};

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_to_bytes() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_write_rendered_grid() {
        let mut grid = Grid::new(100, 10).unwrap();
        grid.add_cell(3, 4);
        let canvas = GridPainter::default().render(&grid, &[]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        PngEncoder::write_to_file(&canvas, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_png_write_to_missing_dir_fails() {
        let canvas = Canvas::new(4, 4).unwrap();
        let result = PngEncoder::write_to_file(&canvas, "/nonexistent/dir/out.png");
        assert!(result.is_err());
    }
}
