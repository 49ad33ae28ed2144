use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [ToolkitConfig](crate::config::ToolkitConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped fields.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value outside of its allowed range.
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the field, e.g. `font.size`.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
