//! Error types for rasterlab operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterlab operations.
///
/// The rasterization algorithms themselves never fail; every variant here
/// comes from a boundary (grid construction, user input, config, output).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a grid or canvas.
    #[error("Invalid dimensions: extent {extent}, cell size {cell_size}")]
    InvalidDimensions {
        /// Extent along each axis, in canvas units.
        extent: u32,
        /// Size of one cell, in canvas units.
        cell_size: u32,
    },

    /// Invalid dimensions for a pixel canvas.
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A circle was requested with a negative radius.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Algorithm name did not match any known variant.
    #[error("Unknown algorithm '{0}' (expected one of: step, dda, bresenham, circle)")]
    UnknownAlgorithm(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}
