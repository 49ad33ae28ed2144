use std::rc::Rc;

use natk_core::config::TabConfig;
use natk_core::event::MouseEvent;
use natk_core::font::{Font, TextMetrics};
use natk_core::kurbo::{Rect, Size};
use natk_core::painter::{Painter, TextAttributes};
use natk_core::view::{View, ViewBase, ViewId};
use natk_theme::id::WidgetId;
use natk_theme::state::{ControlState, ThemePart};

/// Messages a [TabItem] sends to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabItemEvent {
    /// The item was clicked and asks to become the selected tab.
    Activated(ViewId),
}

/// A clickable tab title in the strip of a [TabContainer](super::container::TabContainer).
///
/// The preferred size is derived from the title extent plus padding, in
/// device pixels, and is re-measured whenever the title, font or scale
/// factor changes. Its visual state follows the selection: selected items
/// are `Pressed`, the others `Normal` or `Hovered`.
pub struct TabItem {
    /// Shared view state.
    base: ViewBase,
    /// Text measurement backend.
    metrics: Rc<dyn TextMetrics>,
    /// Strip metrics shared with the container.
    config: Rc<TabConfig>,
    /// The title text.
    title: String,
    /// Measured preferred size.
    size: Size,
    /// Whether this is the selected tab.
    selected: bool,
}

impl TabItem {
    /// Create an item drawn with the font, color and scale factor of `base`.
    pub fn new(
        base: ViewBase,
        metrics: Rc<dyn TextMetrics>,
        config: Rc<TabConfig>,
        title: impl Into<String>,
    ) -> Self {
        let mut item = Self {
            base,
            metrics,
            config,
            title: String::new(),
            size: Size::ZERO,
            selected: false,
        };
        item.set_title(title);
        item
    }

    /// The title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title, re-measures and schedules a repaint.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.measure();
        self.base.invalidate();
    }

    /// The preferred size in device pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether this is the selected tab.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Selects or deselects the item. The visual state changes with it.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.base.set_state(if selected {
            ControlState::Pressed
        } else {
            ControlState::Normal
        });
    }

    /// Turns a click into an activation request for the container.
    ///
    /// Only a press of the primary button activates.
    pub fn handle_click(&mut self, event: &MouseEvent) -> Option<TabItemEvent> {
        if self.base.is_disabled() || !event.is_primary_down() {
            return None;
        }
        Some(TabItemEvent::Activated(self.base.id()))
    }

    fn measure(&mut self) {
        let scale = self.base.scale_factor();
        let extent = self.metrics.measure_text(&self.title, self.base.font());
        self.size = Size::new(
            (extent.width * scale).ceil() + 2.0 * self.config.horizontal_padding * scale,
            (extent.height * scale).ceil() + 2.0 * self.config.vertical_padding * scale,
        );
    }
}

impl View for TabItem {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("natk-widgets", "TabItem")
    }

    fn draw(&mut self, painter: &mut dyn Painter, _dirty: Rect) {
        let mut rect = self.base.local_bounds();
        // Unselected items leave the bottom line to the panel border.
        if !self.selected {
            rect.y1 -= 1.0;
        }
        painter.draw_native_theme(ThemePart::TabItem, self.base.state(), rect);

        let attributes = TextAttributes::centered(self.base.font().clone(), self.base.color());
        painter.draw_text(&self.title, rect, &attributes);
    }

    fn on_dpi_changed(&mut self, scale_factor: f64) {
        self.base.set_scale_factor(scale_factor);
        self.measure();
        self.base.invalidate();
    }

    fn set_font(&mut self, font: Font) {
        self.base.set_font(font);
        self.measure();
        self.base.invalidate();
    }

    fn on_mouse_enter(&mut self, _event: &MouseEvent) {
        if !self.selected && !self.base.is_disabled() {
            self.base.set_state(ControlState::Hovered);
        }
    }

    fn on_mouse_leave(&mut self, _event: &MouseEvent) {
        if !self.selected && !self.base.is_disabled() {
            self.base.set_state(ControlState::Normal);
        }
    }

    fn on_mouse_click(&mut self, _event: &MouseEvent) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natk_core::event::MouseButton;
    use natk_core::headless::{FixedMetrics, RecordingPainter};
    use natk_core::kurbo::Point;

    fn item(title: &str, scale_factor: f64) -> TabItem {
        let mut base = ViewBase::new();
        base.set_font(Font::new("sans-serif", 12.0));
        base.set_scale_factor(scale_factor);
        TabItem::new(base, Rc::new(FixedMetrics::default()), Rc::new(TabConfig::default()), title)
    }

    #[test]
    fn test_size_from_title_and_padding() {
        // "Home" is 24x18 at 12pt.
        assert_eq!(item("Home", 1.0).size(), Size::new(28.0, 20.0));
        assert_eq!(item("Home", 2.0).size(), Size::new(56.0, 40.0));
        assert_eq!(item("", 1.0).size(), Size::new(4.0, 20.0));
    }

    #[test]
    fn test_remeasure_on_title_font_and_dpi() {
        let mut tab = item("Home", 1.0);
        tab.set_title("Settings");
        assert_eq!(tab.size(), Size::new(52.0, 20.0));

        tab.set_font(Font::new("sans-serif", 24.0));
        assert_eq!(tab.size(), Size::new(100.0, 38.0));

        tab.on_dpi_changed(2.0);
        assert_eq!(tab.size(), Size::new(200.0, 76.0));
    }

    #[test]
    fn test_state_follows_selection_and_hover() {
        let mut tab = item("Home", 1.0);
        let event = MouseEvent::moved(Point::ZERO);

        tab.on_mouse_enter(&event);
        assert_eq!(tab.base().state(), ControlState::Hovered);
        tab.on_mouse_leave(&event);
        assert_eq!(tab.base().state(), ControlState::Normal);

        tab.set_selected(true);
        assert_eq!(tab.base().state(), ControlState::Pressed);
        tab.on_mouse_enter(&event);
        tab.on_mouse_leave(&event);
        assert_eq!(tab.base().state(), ControlState::Pressed);

        tab.set_selected(false);
        assert_eq!(tab.base().state(), ControlState::Normal);
    }

    #[test]
    fn test_only_primary_press_activates() {
        let mut tab = item("Home", 1.0);
        let id = tab.id();

        assert_eq!(
            tab.handle_click(&MouseEvent::down(MouseButton::Left, Point::ZERO)),
            Some(TabItemEvent::Activated(id))
        );
        assert_eq!(tab.handle_click(&MouseEvent::down(MouseButton::Right, Point::ZERO)), None);
        assert_eq!(tab.handle_click(&MouseEvent::up(MouseButton::Left, Point::ZERO)), None);
    }

    #[test]
    fn test_unselected_item_leaves_bottom_line() {
        let mut tab = item("Home", 1.0);
        tab.size_allocate(Rect::new(0.0, 0.0, 28.0, 20.0));

        let mut painter = RecordingPainter::new();
        tab.draw(&mut painter, tab.base().local_bounds());
        tab.set_selected(true);
        tab.draw(&mut painter, tab.base().local_bounds());

        assert_eq!(
            painter.themed(ThemePart::TabItem),
            vec![
                (ControlState::Normal, Rect::new(0.0, 0.0, 28.0, 19.0)),
                (ControlState::Pressed, Rect::new(0.0, 0.0, 28.0, 20.0)),
            ]
        );
        assert_eq!(painter.texts()[0].0, "Home");
    }
}
