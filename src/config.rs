//! Configuration.
//!
//! YAML configuration with precedence: CLI > file > defaults. Every field
//! has a default, so an empty file is a valid configuration.

use crate::error::{Error, Result};
use crate::grid::{DEFAULT_CELL_SIZE, DEFAULT_EXTENT};
use crate::raster::Algorithm;
use crate::render::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted `grid.extent`. A rendered grid is `extent x extent`
/// RGBA pixels, so this caps the canvas at 400 MB.
pub const MAX_EXTENT: u32 = 10_000;

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Extent along each axis, in canvas units.
    #[serde(default = "default_extent")]
    pub extent: u32,

    /// Size of one cell, in canvas units.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

fn default_extent() -> u32 {
    DEFAULT_EXTENT
}
fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: default_extent(),
            cell_size: default_cell_size(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,

    /// Algorithm selected at startup.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Colors used by the renderer.
    #[serde(default)]
    pub render: Theme,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::trace!("loading config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Checks that the grid dimensions describe a usable grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let GridConfig { extent, cell_size } = self.grid;
        if extent == 0 {
            return Err(invalid("grid.extent", "must be positive"));
        }
        if extent > MAX_EXTENT {
            return Err(invalid(
                "grid.extent",
                format!("{extent} exceeds maximum {MAX_EXTENT}"),
            ));
        }
        if cell_size == 0 {
            return Err(invalid("grid.cell_size", "must be positive"));
        }
        if cell_size > extent {
            return Err(invalid(
                "grid.cell_size",
                format!("{cell_size} exceeds grid extent {extent}"),
            ));
        }
        Ok(())
    }

    /// Default config file location: `<config_dir>/rasterlab/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rasterlab").join("config.yaml"))
    }
}

fn invalid(key: &str, message: impl Into<String>) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgba;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.grid.extent, 2500);
        assert_eq!(config.grid.cell_size, 25);
        assert_eq!(config.algorithm, Algorithm::StepIncremental);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_empty_mapping() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
grid:
  extent: 500
  cell_size: 10
algorithm: bresenham
render:
  cell: [255, 0, 0, 255]
"#;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.grid.extent, 500);
        assert_eq!(config.grid.cell_size, 10);
        assert_eq!(config.algorithm, Algorithm::BresenhamLine);
        assert_eq!(config.render.cell, Rgba::RED);
        assert_eq!(config.render.background, Theme::default().background);
    }

    #[test]
    fn test_config_parse_algorithm_alias() {
        let config = Config::parse("algorithm: bresenham-circle").unwrap();
        assert_eq!(config.algorithm, Algorithm::BresenhamCircle);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
grid:
  extent: 500
  cell_size: not_a_number
"#;

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(
            err.to_string().contains('4'),
            "Error should include line number: {err}"
        );
    }

    #[test]
    fn test_config_unknown_algorithm_is_parse_error() {
        assert!(matches!(
            Config::parse("algorithm: wu"),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_cell() {
        let mut config = Config::new();
        config.grid.cell_size = 3000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("grid.cell_size"));
    }

    #[test]
    fn test_validate_rejects_zero_extent() {
        let mut config = Config::new();
        config.grid.extent = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { key, .. }) if key == "grid.extent"
        ));
    }

    #[test]
    fn test_validate_rejects_huge_extent() {
        let mut config = Config::new();
        config.grid.extent = u32::MAX;
        config.grid.cell_size = 1;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { key, .. }) if key == "grid.extent"
        ));

        config.grid.extent = MAX_EXTENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid:\n  cell_size: 50\nalgorithm: dda").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.grid.cell_size, 50);
        assert_eq!(config.grid.extent, 2500);
        assert_eq!(config.algorithm, Algorithm::Dda);
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grid:\n  cell_size: 0").unwrap();
        assert!(matches!(Config::load(file.path()), Err(Error::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/rasterlab.yaml"),
            Err(Error::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = Config::load_or_default("/nonexistent/path");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("rasterlab/config.yaml"));
        }
    }
}
