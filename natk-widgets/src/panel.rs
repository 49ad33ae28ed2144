use natk_core::event::MouseEvent;
use natk_core::peniko::Color;
use natk_core::signal::Signal;
use natk_core::view::{View, ViewBase};
use natk_theme::id::WidgetId;

/// A plain rectangular view, typically used as a tab page.
///
/// ### Theming
/// Fills its background color, if any. Nothing else is drawn.
pub struct Panel {
    base: ViewBase,
    /// Emitted when the panel is pressed with the primary button.
    pub on_click: Signal<Panel>,
}

impl Panel {
    /// Create a transparent, non-focusable panel.
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            on_click: Signal::new(),
        }
    }

    /// Set the background color (builder pattern).
    pub fn with_background(mut self, color: Color) -> Self {
        self.base.set_background(Some(color));
        self
    }

    /// Set whether the panel takes keyboard focus (builder pattern).
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.base.set_focusable(focusable);
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Panel {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("natk-widgets", "Panel")
    }

    fn on_mouse_click(&mut self, event: &MouseEvent) -> bool {
        if self.base.is_disabled() {
            return true;
        }
        if !event.is_primary_down() {
            return false;
        }
        self.on_click.emit(self);
        true
    }
}
