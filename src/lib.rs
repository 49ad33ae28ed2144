#![warn(missing_docs)]

//! A native-style UI toolkit core: views, menus mirrored by platform peers
//! and tabbed views.

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use natk_core as core;
pub use natk_theme as theme;
pub use natk_widgets as widgets;

/// A "prelude" for users of the natk toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to build views, menus and tabs.
///
/// ```rust
/// use natk::prelude::*;
///
/// let mut tab = Tab::new(std::rc::Rc::new(FixedMetrics::default()));
/// tab.add_page("General", Panel::new());
/// assert_eq!(tab.selected_page_index(), Some(0));
/// ```
pub mod prelude {
    pub use crate::core::config::{FontConfig, TabConfig, ToolkitConfig};
    pub use crate::core::event::{EventType, MouseButton, MouseEvent};
    pub use crate::core::focus::FocusManager;
    pub use crate::core::font::{Font, TextMetrics};
    pub use crate::core::headless::{FixedMetrics, RecordingPainter};
    pub use crate::core::menu::{MenuBase, MenuItem, MenuItemHandle, MenuItemType, MenuPeer, NullMenuPeer};
    pub use crate::core::painter::{Painter, TextAlign, TextAttributes};
    pub use crate::core::signal::Signal;
    pub use crate::core::view::{BoxedView, View, ViewBase, ViewContainer, ViewId};

    pub use crate::theme::palette::{NativeTheme, Palette};
    pub use crate::theme::state::{ControlState, ThemePart};

    pub use crate::widgets::panel::Panel;
    pub use crate::widgets::tab::{Tab, TabContainer, TabItem};

    pub use vello::kurbo::{Point, Rect, Size};
    pub use vello::peniko::Color;
}
