//! # Theme Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a palette.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Palette file was not found.
    #[error("Palette file not found: {path:?}")]
    PaletteFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing palette TOML.
    #[error("Failed to parse palette: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color value could not be understood.
    #[error("Invalid color {value:?} for {key}: expected #rrggbb or #rrggbbaa")]
    InvalidColor {
        /// Where the color was declared, e.g. `tab_item.hovered.background`.
        key: String,
        /// The offending value.
        value: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a palette file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PaletteFileNotFound { path: path.into() }
    }

    /// Create an invalid color error.
    pub fn invalid_color(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            key: key.into(),
            value: value.into(),
        }
    }
}
