use std::cell::Cell;
use std::rc::Rc;

use natk_core::config::{TabConfig, ToolkitConfig};
use natk_core::event::{EventType, MouseEvent};
use natk_core::font::{Font, TextMetrics};
use natk_core::kurbo::{Point, Rect, Size, Vec2};
use natk_core::painter::Painter;
use natk_core::peniko::Color;
use natk_core::view::{draw_child, BoxedView, View, ViewBase, ViewId};
use natk_theme::state::ThemePart;

use crate::tab::item::{TabItem, TabItemEvent};

/// What a pointer press did to a [TabContainer].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing under the pointer wanted the event.
    Ignored,
    /// An item or the selected page consumed the event.
    Handled,
    /// A tab item was activated and the selection changed (or was re-applied).
    SelectionChanged,
}

/// The tab strip and the page area of a [Tab](super::Tab).
///
/// Item `i` stands for page `i`. The pages are owned by the tab and passed in
/// by every operation that needs them, so the container only ever sees them
/// borrowed. At most one page, the selected one, is visible.
pub struct TabContainer {
    /// Shared view state.
    base: ViewBase,
    /// Text measurement backend.
    metrics: Rc<dyn TextMetrics>,
    /// Strip metrics, shared with the items.
    config: Rc<TabConfig>,
    /// Tab items, in page order.
    items: Vec<TabItem>,
    /// Index of the selected item and page.
    selected: Option<usize>,
    /// Height of the tab strip, computed lazily and dropped on font or scale change.
    items_height: Cell<Option<f64>>,
    /// The item under the pointer.
    hovered: Option<ViewId>,
}

impl TabContainer {
    /// Create an empty container.
    pub fn new(metrics: Rc<dyn TextMetrics>, config: &ToolkitConfig) -> Self {
        Self {
            base: ViewBase::from_config(config),
            metrics,
            config: Rc::new(config.tab.clone()),
            items: Vec::new(),
            selected: None,
            items_height: Cell::new(None),
            hovered: None,
        }
    }

    /// Shared view state.
    pub fn base(&self) -> &ViewBase {
        &self.base
    }

    /// Shared view state, mutably.
    pub fn base_mut(&mut self) -> &mut ViewBase {
        &mut self.base
    }

    /// The strip metrics.
    pub fn config(&self) -> &TabConfig {
        &self.config
    }

    /// Number of tab items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item at `index`.
    pub fn item_at(&self, index: usize) -> Option<&TabItem> {
        self.items.get(index)
    }

    /// The items in page order.
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Index of the selected item.
    pub fn selected_item_index(&self) -> Option<usize> {
        self.selected
    }

    /// Adds an item for the page just pushed onto `pages`.
    ///
    /// The first item becomes selected. Returns whether the selection changed.
    pub fn add_page(&mut self, title: impl Into<String>, pages: &mut [BoxedView]) -> bool {
        let item = TabItem::new(self.item_base(), self.metrics.clone(), self.config.clone(), title);
        let id = item.id();
        self.items.push(item);
        log::debug!("TabContainer: added tab {} ({:?})", self.items.len() - 1, id);

        let changed = self.items.len() == 1 && self.set_selected_item(id, pages);
        if !changed {
            self.layout(pages);
        }
        changed
    }

    /// Removes the item at `index`. The page has already been taken out of `pages`.
    ///
    /// Removing the selected item selects its successor, wrapping around to
    /// the first one, and shows that page. Returns whether the selection
    /// changed.
    pub fn remove_page_at(&mut self, index: usize, pages: &mut [BoxedView]) -> bool {
        let count = self.items.len();
        if index >= count {
            return false;
        }

        let mut selection_changed = false;
        match self.selected {
            Some(selected) if selected == index => {
                selection_changed = true;
                if count == 1 {
                    self.selected = None;
                } else {
                    let next = (index + 1) % count;
                    self.items[next].set_selected(true);
                    let next = if next > index { next - 1 } else { next };
                    if let Some(page) = pages.get_mut(next) {
                        page.set_visible(true);
                    }
                    self.selected = Some(next);
                }
            },
            Some(selected) if selected > index => self.selected = Some(selected - 1),
            _ => {},
        }

        let removed = self.items.remove(index);
        if self.hovered == Some(removed.id()) {
            self.hovered = None;
        }
        log::debug!(
            "TabContainer: removed tab {}, selection is now {:?}",
            index,
            self.selected
        );

        self.layout(pages);
        selection_changed
    }

    /// Selects the item at `index`. Out of range indices are ignored.
    ///
    /// Returns whether observers should be notified.
    pub fn select_item_at(&mut self, index: usize, pages: &mut [BoxedView]) -> bool {
        match self.items.get(index) {
            Some(item) => {
                let id = item.id();
                self.set_selected_item(id, pages)
            },
            None => {
                log::trace!("TabContainer: ignoring selection of missing tab {}", index);
                false
            },
        }
    }

    /// Selects the item `id`, hiding the previously selected page and showing
    /// the new one.
    ///
    /// Selecting the selected item again re-runs layout and reports a change
    /// unless [TabConfig::notify_on_reselect] is off. Returns whether observers
    /// should be notified.
    pub fn set_selected_item(&mut self, id: ViewId, pages: &mut [BoxedView]) -> bool {
        let Some(index) = self.index_of(id) else {
            log::trace!("TabContainer: {:?} is not one of our tabs", id);
            return false;
        };
        if self.selected == Some(index) && !self.config.notify_on_reselect {
            return false;
        }

        if let Some(previous) = self.selected.filter(|previous| *previous != index) {
            self.items[previous].set_selected(false);
            if let Some(page) = pages.get_mut(previous) {
                page.set_visible(false);
            }
        }

        self.items[index].set_selected(true);
        self.selected = Some(index);
        if let Some(page) = pages.get_mut(index) {
            page.set_visible(true);
        }

        self.layout(pages);
        true
    }

    /// Height of the tab strip in device pixels.
    pub fn items_height(&self) -> f64 {
        if let Some(height) = self.items_height.get() {
            return height;
        }

        let scale = self.base.scale_factor();
        let reference = self.metrics.measure_text(&self.config.reference_text, self.base.font());
        let padding = 2.0 * self.config.vertical_padding + self.config.top_padding;
        let height = (reference.height * scale).ceil() + padding * scale + 1.0;
        self.items_height.set(Some(height));
        height
    }

    /// The smallest size showing every tab, in device pixels.
    pub fn minimum_size(&self) -> Size {
        let padding = 2.0 * self.config.content_padding * self.base.scale_factor();
        let width: f64 = self.items.iter().map(|item| item.base().size_allocation().width()).sum();
        Size::new(width + padding, self.items_height() + padding)
    }

    /// Places the items left to right along the top edge and the selected
    /// page in the padded area below them.
    pub fn layout(&mut self, pages: &mut [BoxedView]) {
        let scale = self.base.scale_factor();
        let strip = self.items_height();
        let bounds = self.base.size_allocation();
        let top_padding = self.config.top_padding * scale;

        let mut x = 0.0;
        for item in &mut self.items {
            let mut rect =
                Rect::from_origin_size(bounds.origin() + Vec2::new(x, 0.0), Size::new(item.size().width, strip));
            if !item.is_selected() {
                rect.y0 += top_padding;
            }
            item.size_allocate(rect);
            x += rect.width();
        }

        if let Some(page) = self.selected.and_then(|index| pages.get_mut(index)) {
            let padding = self.config.content_padding * scale;
            let x0 = bounds.x0 + padding;
            let y0 = bounds.y0 + padding + strip - scale;
            let rect = Rect::new(
                x0,
                y0,
                (bounds.x1 - padding).max(x0),
                (bounds.y1 - padding).max(y0),
            );
            page.size_allocate(rect);
            page.layout();
        }

        self.base.invalidate();
    }

    /// Allocates the container and lays out its children.
    pub fn size_allocate(&mut self, rect: Rect, pages: &mut [BoxedView]) {
        self.base.size_allocate(rect);
        self.layout(pages);
    }

    /// Draws the panel, the tab items and the selected page.
    pub fn draw(&mut self, painter: &mut dyn Painter, dirty: Rect, pages: &mut [BoxedView]) {
        let mut panel = self.base.local_bounds();
        if !self.items.is_empty() {
            panel.y0 = (panel.y0 + self.items_height() - 1.0).min(panel.y1);
        }
        painter.draw_native_theme(ThemePart::TabPanel, self.base.state(), panel);

        for item in &mut self.items {
            draw_child(&self.base, item, painter, dirty);
        }
        if let Some(page) = self.selected.and_then(|index| pages.get_mut(index)) {
            draw_child(&self.base, &mut **page, painter, dirty);
        }
    }

    /// Visits item 0, page 0, item 1, page 1 and so on (or the reverse),
    /// stopping when `callback` returns `false`.
    pub fn for_each(
        &mut self,
        pages: &mut [BoxedView],
        reverse: bool,
        callback: &mut dyn FnMut(&mut dyn View) -> bool,
    ) {
        let count = self.items.len();
        let order: Vec<usize> = if reverse {
            (0..count).rev().collect()
        } else {
            (0..count).collect()
        };

        for index in order {
            let item: &mut dyn View = &mut self.items[index];
            if !callback(item) {
                return;
            }
            let Some(page) = pages.get_mut(index) else {
                return;
            };
            if !callback(&mut **page) {
                return;
            }
        }
    }

    /// Whether `id` is one of the items or the selected page.
    ///
    /// Unselected pages are not part of the tree.
    pub fn has_child(&self, id: ViewId, pages: &[BoxedView]) -> bool {
        let selected_page = self.selected.and_then(|index| pages.get(index));
        selected_page.is_some_and(|page| page.id() == id) || self.items.iter().any(|item| item.id() == id)
    }

    /// Sets the font of the container and its items, then re-runs layout.
    pub fn set_font(&mut self, font: Font, pages: &mut [BoxedView]) {
        for item in &mut self.items {
            item.set_font(font.clone());
        }
        self.base.set_font(font);
        self.items_height.set(None);
        self.layout(pages);
    }

    /// Sets the text color of the container and its items.
    pub fn set_color(&mut self, color: Color) {
        for item in &mut self.items {
            item.set_color(color);
        }
        self.base.set_color(color);
        self.base.invalidate();
    }

    /// Applies a new scale factor to the container and its items, then
    /// re-runs layout.
    pub fn on_dpi_changed(&mut self, scale_factor: f64, pages: &mut [BoxedView]) {
        for item in &mut self.items {
            item.on_dpi_changed(scale_factor);
        }
        self.base.set_scale_factor(scale_factor);
        self.items_height.set(None);
        self.layout(pages);
    }

    /// Index of the item under `point` (window coordinates).
    pub fn item_at_point(&self, point: Point) -> Option<usize> {
        self.items.iter().position(|item| item.base().contains(point))
    }

    /// Tracks the hovered item, sending enter and leave to the items involved.
    pub fn handle_mouse_move(&mut self, event: &MouseEvent) {
        let target = self.item_at_point(event.position).map(|index| self.items[index].id());
        if target == self.hovered {
            if let Some(index) = target.and_then(|id| self.index_of(id)) {
                self.items[index].on_mouse_move(event);
            }
            return;
        }

        if let Some(index) = self.hovered.and_then(|id| self.index_of(id)) {
            self.items[index].on_mouse_leave(&event.with_kind(EventType::MouseLeave));
        }
        if let Some(index) = target.and_then(|id| self.index_of(id)) {
            self.items[index].on_mouse_enter(&event.with_kind(EventType::MouseEnter));
        }
        self.hovered = target;
    }

    /// The pointer left the container.
    pub fn handle_mouse_leave(&mut self, event: &MouseEvent) {
        if let Some(index) = self.hovered.take().and_then(|id| self.index_of(id)) {
            self.items[index].on_mouse_leave(&event.with_kind(EventType::MouseLeave));
        }
    }

    /// Routes a press or release to the item or the selected page under the pointer.
    pub fn handle_mouse_click(&mut self, event: &MouseEvent, pages: &mut [BoxedView]) -> ClickOutcome {
        if let Some(index) = self.item_at_point(event.position) {
            if let Some(TabItemEvent::Activated(id)) = self.items[index].handle_click(event) {
                if self.set_selected_item(id, pages) {
                    return ClickOutcome::SelectionChanged;
                }
            }
            return ClickOutcome::Handled;
        }

        let page = self.selected.and_then(|index| pages.get_mut(index));
        match page {
            Some(page) if page.base().is_visible() && page.base().contains(event.position) => {
                if page.on_mouse_click(event) {
                    ClickOutcome::Handled
                } else {
                    ClickOutcome::Ignored
                }
            },
            _ => ClickOutcome::Ignored,
        }
    }

    /// Forwards pointer motion to the selected page when it is under the pointer.
    pub fn forward_mouse_move(&mut self, event: &MouseEvent, pages: &mut [BoxedView]) {
        if let Some(page) = self.selected.and_then(|index| pages.get_mut(index)) {
            if page.base().is_visible() && page.base().contains(event.position) {
                page.on_mouse_move(event);
            }
        }
    }

    fn index_of(&self, id: ViewId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn item_base(&self) -> ViewBase {
        let mut base = ViewBase::new();
        base.set_font(self.base.font().clone());
        base.set_color(self.base.color());
        base.set_scale_factor(self.base.scale_factor());
        base.set_parent(Some(self.base.id()));
        base
    }
}
