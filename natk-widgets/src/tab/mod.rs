use std::rc::Rc;

use natk_core::config::ToolkitConfig;
use natk_core::event::MouseEvent;
use natk_core::font::{Font, TextMetrics};
use natk_core::kurbo::{Rect, Size};
use natk_core::painter::Painter;
use natk_core::peniko::Color;
use natk_core::signal::Signal;
use natk_core::view::{BoxedView, View, ViewBase, ViewContainer, ViewId};
use natk_theme::id::WidgetId;

/// Contains the [TabContainer](container::TabContainer) strip and page area.
pub mod container;
/// Contains the [TabItem](item::TabItem) view.
pub mod item;

pub use container::{ClickOutcome, TabContainer};
pub use item::{TabItem, TabItemEvent};

/// A tabbed view: a strip of titles above a page area showing one page at a time.
///
/// ### Selection
/// The first page added becomes selected. Removing the selected page selects
/// the next one, wrapping around to the first. Every selection change emits
/// [on_selected_page_change](Tab::on_selected_page_change).
///
/// ### Theming
/// The strip and the panel are drawn with the native `TabItem` and `TabPanel` parts.
pub struct Tab {
    container: TabContainer,
    pages: Vec<BoxedView>,
    /// Emitted after the selected page changed, with the tab itself.
    pub on_selected_page_change: Signal<Tab>,
}

impl Tab {
    /// Create an empty tab with the default configuration.
    pub fn new(metrics: Rc<dyn TextMetrics>) -> Self {
        Self::with_config(metrics, &ToolkitConfig::default())
    }

    /// Create an empty tab using the font, scale factor and tab metrics of `config`.
    pub fn with_config(metrics: Rc<dyn TextMetrics>, config: &ToolkitConfig) -> Self {
        Self {
            container: TabContainer::new(metrics, config),
            pages: Vec::new(),
            on_selected_page_change: Signal::new(),
        }
    }

    /// Appends `page` under a tab titled `title`.
    ///
    /// Every page but the first starts hidden.
    pub fn add_page(&mut self, title: impl Into<String>, page: impl View + 'static) {
        self.add_boxed_page(title, Box::new(page));
    }

    /// Appends an already boxed `page` under a tab titled `title`.
    pub fn add_boxed_page(&mut self, title: impl Into<String>, mut page: BoxedView) {
        page.base_mut().set_parent(Some(self.container.base().id()));
        let scale_factor = self.container.base().scale_factor();
        if page.base().scale_factor() != scale_factor {
            page.on_dpi_changed(scale_factor);
        }
        if !self.pages.is_empty() {
            page.set_visible(false);
        }

        self.pages.push(page);
        if self.container.add_page(title, &mut self.pages) {
            self.emit_selected_page_change();
        }
    }

    /// Removes and returns the page at `index`, detached from the tab.
    pub fn remove_page(&mut self, index: usize) -> Option<BoxedView> {
        if index >= self.pages.len() {
            log::trace!("Tab: ignoring removal of missing page {}", index);
            return None;
        }

        let mut page = self.pages.remove(index);
        page.base_mut().set_parent(None);
        if self.container.remove_page_at(index, &mut self.pages) {
            self.emit_selected_page_change();
        }
        Some(page)
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page at `index`.
    pub fn page_at(&self, index: usize) -> Option<&dyn View> {
        self.pages.get(index).map(|page| &**page)
    }

    /// The page at `index`, mutably.
    pub fn page_at_mut(&mut self, index: usize) -> Option<&mut (dyn View + 'static)> {
        self.pages.get_mut(index).map(|page| &mut **page)
    }

    /// The title of the page at `index`.
    pub fn page_title(&self, index: usize) -> Option<&str> {
        self.container.item_at(index).map(TabItem::title)
    }

    /// Selects the page at `index`. Out of range indices are ignored.
    pub fn select_page_at(&mut self, index: usize) {
        if self.container.select_item_at(index, &mut self.pages) {
            self.emit_selected_page_change();
        }
    }

    /// Index of the selected page.
    pub fn selected_page_index(&self) -> Option<usize> {
        self.container.selected_item_index()
    }

    /// The selected page.
    pub fn selected_page(&self) -> Option<&dyn View> {
        self.selected_page_index().and_then(|index| self.page_at(index))
    }

    /// The smallest size showing every tab, in logical units.
    pub fn minimum_size(&self) -> Size {
        let size = self.container.minimum_size();
        let scale_factor = self.container.base().scale_factor();
        Size::new(size.width / scale_factor, size.height / scale_factor)
    }

    /// The strip and page area.
    pub fn container(&self) -> &TabContainer {
        &self.container
    }

    fn emit_selected_page_change(&self) {
        log::debug!("Tab: selected page is now {:?}", self.selected_page_index());
        self.on_selected_page_change.emit(self);
    }
}

impl View for Tab {
    fn base(&self) -> &ViewBase {
        self.container.base()
    }

    fn base_mut(&mut self) -> &mut ViewBase {
        self.container.base_mut()
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("natk-widgets", "Tab")
    }

    fn size_allocate(&mut self, rect: Rect) {
        self.container.size_allocate(rect, &mut self.pages);
    }

    fn layout(&mut self) {
        self.container.layout(&mut self.pages);
    }

    fn draw(&mut self, painter: &mut dyn Painter, dirty: Rect) {
        self.container.draw(painter, dirty, &mut self.pages);
    }

    fn on_dpi_changed(&mut self, scale_factor: f64) {
        for page in &mut self.pages {
            page.on_dpi_changed(scale_factor);
        }
        self.container.on_dpi_changed(scale_factor, &mut self.pages);
    }

    fn set_font(&mut self, font: Font) {
        self.container.set_font(font, &mut self.pages);
    }

    fn set_color(&mut self, color: Color) {
        self.container.set_color(color);
    }

    fn on_mouse_move(&mut self, event: &MouseEvent) {
        self.container.handle_mouse_move(event);
        self.container.forward_mouse_move(event, &mut self.pages);
    }

    fn on_mouse_leave(&mut self, event: &MouseEvent) {
        self.container.handle_mouse_leave(event);
    }

    fn on_mouse_click(&mut self, event: &MouseEvent) -> bool {
        if self.base().is_disabled() {
            return true;
        }
        match self.container.handle_mouse_click(event, &mut self.pages) {
            ClickOutcome::SelectionChanged => {
                self.emit_selected_page_change();
                true
            },
            ClickOutcome::Handled => true,
            ClickOutcome::Ignored => false,
        }
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn ViewContainer> {
        Some(self)
    }
}

impl ViewContainer for Tab {
    fn for_each(&mut self, reverse: bool, callback: &mut dyn FnMut(&mut dyn View) -> bool) {
        self.container.for_each(&mut self.pages, reverse, callback);
    }

    fn has_child(&self, id: ViewId) -> bool {
        self.container.has_child(id, &self.pages)
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let titles: Vec<&str> = self.container.items().iter().map(TabItem::title).collect();
        f.debug_struct("Tab")
            .field("id", &self.container.base().id())
            .field("pages", &titles)
            .field("selected", &self.selected_page_index())
            .finish()
    }
}
