//! Game configuration.
//!
//! Settings are read once, validated, and handed to [`Game`](crate::Game) at
//! construction. Nothing changes them afterwards.

use draughts_core::{Side, MAX_DIMENSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Width or depth outside `1..=15`.
    #[error("invalid board dimensions {width}x{depth}: both must be within 1..=15")]
    InvalidDimensions { width: u8, depth: u8 },
    /// The two sides' starting rows would overlap.
    #[error("{rows} starting rows per side do not fit on a board {width} cells wide")]
    TooManyRows { rows: u8, width: u8 },
}

/// Immutable setup of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells along the x (forward) axis.
    pub width: u8,
    /// Cells along the y axis.
    pub depth: u8,
    /// Side that moves first.
    pub starting_side: Side,
    /// Columns filled by the standard layout on each side's home edge.
    pub rows_per_side: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 8,
            depth: 8,
            starting_side: Side::White,
            rows_per_side: 3,
        }
    }
}

impl GameConfig {
    /// Checks dimensions and starting rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if either dimension is
    /// outside `1..=15`, or [`ConfigError::TooManyRows`] if the starting rows
    /// of both sides would overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 1..=MAX_DIMENSION;
        if !range.contains(&self.width) || !range.contains(&self.depth) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                depth: self.depth,
            });
        }
        if self.rows_per_side as u16 * 2 > self.width as u16 {
            return Err(ConfigError::TooManyRows {
                rows: self.rows_per_side,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Parses and validates a TOML configuration. Missing fields take their
    /// default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or a validation
    /// error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 8);
        assert_eq!(config.depth, 8);
        assert_eq!(config.starting_side, Side::White);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let config = GameConfig::from_toml_str(
            r#"
width = 10
depth = 12
starting_side = "Black"
rows_per_side = 4
"#,
        )
        .unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.depth, 12);
        assert_eq!(config.starting_side, Side::Black);
        assert_eq!(config.rows_per_side, 4);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = GameConfig::from_toml_str("depth = 6").unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.depth, 6);
        assert_eq!(config.starting_side, Side::White);
        assert_eq!(config.rows_per_side, 3);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            GameConfig::from_toml_str("width = 0"),
            Err(ConfigError::InvalidDimensions { width: 0, depth: 8 })
        ));
        assert!(matches!(
            GameConfig::from_toml_str("depth = 16"),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_overlapping_rows() {
        assert!(matches!(
            GameConfig::from_toml_str("width = 5\nrows_per_side = 3"),
            Err(ConfigError::TooManyRows { rows: 3, width: 5 })
        ));
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("width = "),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str(r#"starting_side = "Red""#),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/draughts.toml"),
            Err(ConfigError::ReadError(_))
        ));
    }
}
