#![warn(missing_docs)]

//! # natk Theming
//!
//! Widget identifiers, control states and the native theme palette used when
//! painting composite controls such as the tab strip.
//!
//! ```rust
//! use natk_theme::palette::{NativeTheme, Palette};
//! use natk_theme::state::{ControlState, ThemePart};
//!
//! let palette = Palette::light();
//! let style = palette.part_style(ThemePart::TabItem, ControlState::Hovered);
//! let _ = style.background;
//! ```

/// Contains the [WidgetId](id::WidgetId) type.
pub mod id;

/// Contains control states and themed part identifiers.
pub mod state;

/// Contains the [NativeTheme](palette::NativeTheme) trait and the built-in palette.
pub mod palette;

/// Contains the theme error types.
pub mod error;

pub use error::{ThemeError, ThemeResult};
