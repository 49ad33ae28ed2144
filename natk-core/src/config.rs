//! Toolkit configuration.
//!
//! ```toml
//! scale_factor = 1.5
//!
//! [font]
//! family = "Noto Sans"
//! size = 13.0
//!
//! [tab]
//! content_padding = 6
//! notify_on_reselect = false
//! ```
//!
//! **Environment:** `NATK_CONFIG` points at a TOML file, `NATK_SCALE_FACTOR`
//! overrides the display scale factor.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::font::Font;

/// natk configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// The default font of new views.
    pub font: FontConfig,
    /// The initial display scale factor (device pixels per logical unit).
    pub scale_factor: f64,
    /// Tab strip metrics and behavior.
    pub tab: TabConfig,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            font: FontConfig::default(),
            scale_factor: 1.0,
            tab: TabConfig::default(),
        }
    }
}

/// Default font configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// The font family name.
    pub family: String,
    /// The font size in logical units.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12.0,
        }
    }
}

impl FontConfig {
    /// Builds the [Font] described by this configuration.
    pub fn to_font(&self) -> Font {
        Font::new(self.family.clone(), self.size)
    }
}

/// Tab strip metrics, in logical units, and selection behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    /// Padding left and right of a tab title.
    pub horizontal_padding: f64,
    /// Padding above and below a tab title.
    pub vertical_padding: f64,
    /// Extra space above unselected tab items.
    pub top_padding: f64,
    /// Padding between the container bounds and the page.
    pub content_padding: f64,
    /// Text measured to derive the height of the tab strip.
    pub reference_text: String,
    /// Whether selecting the already selected tab re-runs layout and emits
    /// the selected page change notification again.
    pub notify_on_reselect: bool,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            horizontal_padding: 2.0,
            vertical_padding: 1.0,
            top_padding: 1.0,
            content_padding: 5.0,
            reference_text: "bp".to_string(),
            notify_on_reselect: true,
        }
    }
}

impl ToolkitConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from `NATK_CONFIG` if set, then applies
    /// `NATK_SCALE_FACTOR`. Falls back to defaults on any failure.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var("NATK_CONFIG") {
            Ok(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Ignoring NATK_CONFIG={}: {}", path, err);
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        };

        if let Ok(value) = env::var("NATK_SCALE_FACTOR") {
            match value.trim().parse::<f64>() {
                Ok(scale) if scale > 0.0 => {
                    log::debug!("NATK_SCALE_FACTOR={} detected", scale);
                    config.scale_factor = scale;
                },
                _ => log::warn!("Ignoring invalid NATK_SCALE_FACTOR={}", value),
            }
        }

        config
    }

    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load the configuration from TOML content. Missing fields keep their defaults.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the layout code cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(ConfigError::invalid("scale_factor", format!("must be positive, got {}", self.scale_factor)));
        }
        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            return Err(ConfigError::invalid("font.size", format!("must be positive, got {}", self.font.size)));
        }

        let tab = &self.tab;
        let paddings = [
            ("tab.horizontal_padding", tab.horizontal_padding),
            ("tab.vertical_padding", tab.vertical_padding),
            ("tab.top_padding", tab.top_padding),
            ("tab.content_padding", tab.content_padding),
        ];
        for (field, value) in paddings {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, format!("must not be negative, got {}", value)));
            }
        }
        if tab.reference_text.is_empty() {
            return Err(ConfigError::invalid("tab.reference_text", "must not be empty"));
        }

        Ok(())
    }

    /// Sets the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Sets the tab configuration.
    pub fn with_tab(mut self, tab: TabConfig) -> Self {
        self.tab = tab;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ToolkitConfig::from_toml(
            r#"
            scale_factor = 2.0

            [tab]
            notify_on_reselect = false
            "#,
        )
        .unwrap();

        assert_eq!(config.scale_factor, 2.0);
        assert!(!config.tab.notify_on_reselect);
        assert_eq!(config.tab.content_padding, 5.0);
        assert_eq!(config.tab.reference_text, "bp");
        assert_eq!(config.font, FontConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = ToolkitConfig::from_toml("scale_factor = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "scale_factor", .. }));

        let err = ToolkitConfig::from_toml("[tab]\ncontent_padding = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tab.content_padding", .. }));

        let err = ToolkitConfig::from_toml("scale_factor = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ToolkitConfig::from_file("/nonexistent/natk/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
