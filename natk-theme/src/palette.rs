//! # Native Theme Palette
//!
//! The native theming service answers "how should this part look in this
//! state". Painters call [NativeTheme::part_style] when asked to draw a themed
//! background and turn the answer into fills and strokes.
//!
//! The built-in [Palette] is a light theme. Individual entries can be
//! overridden from TOML:
//!
//! ```toml
//! [tab_item.hovered]
//! background = "#dcdcdc"
//!
//! [tab_panel.normal]
//! border = "#a0a0a0"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};
use crate::state::{ControlState, ThemePart};

/// Colors used to paint one themed part in one state.
#[derive(Debug, Clone, Copy)]
pub struct PartStyle {
    /// Fill color.
    pub background: Color,
    /// Outline color.
    pub border: Color,
}

/// A source of themed part styles.
pub trait NativeTheme {
    /// Returns the style for `part` drawn in `state`.
    fn part_style(&self, part: ThemePart, state: ControlState) -> PartStyle;
}

/// A table of part styles keyed by part and state.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<(ThemePart, ControlState), PartStyle>,
}

#[derive(Debug, Default, Deserialize)]
struct StyleEntry {
    background: Option<String>,
    border: Option<String>,
}

type PaletteFile = HashMap<String, HashMap<String, StyleEntry>>;

impl Palette {
    /// The built-in light palette.
    pub fn light() -> Self {
        let border = Color::from_rgb8(180, 180, 180);
        let mut styles = HashMap::new();

        let tab_item = [
            (ControlState::Normal, Color::from_rgb8(230, 230, 230)),
            (ControlState::Hovered, Color::from_rgb8(220, 220, 220)),
            (ControlState::Pressed, Color::WHITE),
            (ControlState::Disabled, Color::from_rgb8(240, 240, 240)),
        ];
        for (state, background) in tab_item {
            styles.insert((ThemePart::TabItem, state), PartStyle { background, border });
        }

        for state in ControlState::ALL {
            styles.insert(
                (ThemePart::TabPanel, state),
                PartStyle {
                    background: Color::WHITE,
                    border,
                },
            );
        }

        Self { styles }
    }

    /// Loads a palette from a TOML file, overriding the light defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses TOML palette overrides on top of the light defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: PaletteFile = toml::from_str(content)?;
        let mut palette = Self::light();

        for (part_key, states) in &file {
            let Some(part) = parse_part(part_key) else {
                log::warn!("Ignoring unknown palette part '{}'", part_key);
                continue;
            };
            for (state_key, entry) in states {
                let Some(state) = ControlState::ALL.into_iter().find(|s| s.key() == state_key) else {
                    log::warn!("Ignoring unknown state '{}' in palette part '{}'", state_key, part_key);
                    continue;
                };
                let style = palette.styles.entry((part, state)).or_insert(PartStyle {
                    background: Color::WHITE,
                    border: Color::BLACK,
                });
                if let Some(value) = &entry.background {
                    style.background = parse_color(&format!("{part_key}.{state_key}.background"), value)?;
                }
                if let Some(value) = &entry.border {
                    style.border = parse_color(&format!("{part_key}.{state_key}.border"), value)?;
                }
            }
        }

        Ok(palette)
    }

    /// Replaces a single style.
    pub fn set(&mut self, part: ThemePart, state: ControlState, style: PartStyle) {
        self.styles.insert((part, state), style);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl NativeTheme for Palette {
    fn part_style(&self, part: ThemePart, state: ControlState) -> PartStyle {
        self.styles
            .get(&(part, state))
            .or_else(|| self.styles.get(&(part, ControlState::Normal)))
            .copied()
            .unwrap_or(PartStyle {
                background: Color::WHITE,
                border: Color::BLACK,
            })
    }
}

fn parse_part(key: &str) -> Option<ThemePart> {
    [ThemePart::TabItem, ThemePart::TabPanel]
        .into_iter()
        .find(|part| part.key() == key)
}

/// Parses `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(key: &str, value: &str) -> ThemeResult<Color> {
    let hex = value
        .strip_prefix('#')
        .ok_or_else(|| ThemeError::invalid_color(key, value))?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(ThemeError::invalid_color(key, value));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ThemeError::invalid_color(key, value))
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        let color = parse_color("k", "#ff8000").unwrap();
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 128, 0, 255));

        let color = parse_color("k", "#00000080").unwrap();
        assert_eq!(color.to_rgba8().a, 128);

        assert!(parse_color("k", "ff8000").is_err());
        assert!(parse_color("k", "#ff80").is_err());
        assert!(parse_color("k", "#gg8000").is_err());
    }

    #[test]
    fn test_overrides_keep_defaults() {
        let palette = Palette::from_toml(
            r##"
            [tab_item.hovered]
            background = "#102030"
            "##,
        )
        .unwrap();

        let hovered = palette.part_style(ThemePart::TabItem, ControlState::Hovered);
        let rgba = hovered.background.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0x10, 0x20, 0x30));
        // Untouched border falls back to the light default.
        assert_eq!(hovered.border.to_rgba8().r, 180);

        let normal = palette.part_style(ThemePart::TabItem, ControlState::Normal);
        assert_eq!(normal.background.to_rgba8().r, 230);
    }

    #[test]
    fn test_invalid_color_reports_key() {
        let err = Palette::from_toml(
            r##"
            [tab_panel.normal]
            border = "blue"
            "##,
        )
        .unwrap_err();

        match err {
            ThemeError::InvalidColor { key, value } => {
                assert_eq!(key, "tab_panel.normal.border");
                assert_eq!(value, "blue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
