//! Colors for the grid renderer.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
///
/// Serializes as a four-element array `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque gray, the fill of painted cells.
    pub const GRAY: Self = Self::new(128, 128, 128, 255);
    /// Opaque light gray, the grid line color.
    pub const LIGHT_GRAY: Self = Self::new(211, 211, 211, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque blue, the reference line color.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::GRAY.r, 128);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_array(c.to_array()), c);
        let arr: [u8; 4] = c.into();
        assert_eq!(arr, [1, 2, 3, 4]);
    }

    #[test]
    fn test_rgba_serde_as_array() {
        let yaml = serde_yaml_ng::to_string(&Rgba::BLUE).unwrap();
        let back: Rgba = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, Rgba::BLUE);
        let parsed: Rgba = serde_yaml_ng::from_str("[211, 211, 211, 255]").unwrap();
        assert_eq!(parsed, Rgba::LIGHT_GRAY);
    }
}
