//! RGBA pixel canvas.

use super::Rgba;
use crate::error::{Error, Result};

/// Tightly packed RGBA8 pixel buffer in row-major order.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterlab::render::Canvas;
    ///
    /// let canvas = Canvas::new(800, 600).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole canvas with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// The region is clipped to the canvas; negative origins are allowed.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba) {
        let x1 = x.clamp(0, i64::from(self.width));
        let y1 = y.clamp(0, i64::from(self.height));
        let x2 = (x + i64::from(w)).clamp(0, i64::from(self.width));
        let y2 = (y + i64::from(h)).clamp(0, i64::from(self.height));

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;
        for row_y in y1..y2 {
            let start = (row_y as usize) * row_bytes + (x1 as usize) * 4;
            let end = (row_y as usize) * row_bytes + (x2 as usize) * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.pixel_index(i64::from(x), i64::from(y))?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    #[inline]
    fn pixel_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}
