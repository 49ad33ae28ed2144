//! Visual states and themed parts.

use std::fmt::{Display, Formatter};

/// The visual state of a control, used to pick a themed drawing variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Idle.
    #[default]
    Normal,
    /// The pointer is over the control.
    Hovered,
    /// The control is pressed. Selected tab items stay in this state.
    Pressed,
    /// The control does not react to input.
    Disabled,
}

impl ControlState {
    /// All states, in palette order.
    pub const ALL: [ControlState; 4] = [
        ControlState::Normal,
        ControlState::Hovered,
        ControlState::Pressed,
        ControlState::Disabled,
    ];

    /// The key used for this state in palette files.
    pub fn key(&self) -> &'static str {
        match self {
            ControlState::Normal => "normal",
            ControlState::Hovered => "hovered",
            ControlState::Pressed => "pressed",
            ControlState::Disabled => "disabled",
        }
    }
}

impl Display for ControlState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A part of a composite control that the native theme knows how to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePart {
    /// A single tab label in the tab strip.
    TabItem,
    /// The panel framing the content area below the tab strip.
    TabPanel,
}

impl ThemePart {
    /// The key used for this part in palette files.
    pub fn key(&self) -> &'static str {
        match self {
            ThemePart::TabItem => "tab_item",
            ThemePart::TabPanel => "tab_panel",
        }
    }
}

impl Display for ThemePart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
