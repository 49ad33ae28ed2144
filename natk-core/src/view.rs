use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;
use natk_theme::id::WidgetId;
use natk_theme::state::ControlState;
use vello::kurbo::{Point, Rect};
use vello::peniko::Color;

use crate::config::ToolkitConfig;
use crate::event::MouseEvent;
use crate::font::Font;
use crate::painter::Painter;

/// A boxed view.
pub type BoxedView = Box<dyn View>;

/// Unique identifier of a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u64);

impl ViewId {
    /// Generate a new unique view ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

bitflags! {
    /// What a view needs before the next frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// Some region must be repainted.
        const PAINT = 0b0001;
    }
}

/// State shared by every view: identity, font, colors, scale factor, visual
/// state, placement, visibility, focus and invalidation.
///
/// The size allocation is in window coordinates (device pixels).
#[derive(Debug, Clone)]
pub struct ViewBase {
    id: ViewId,
    font: Font,
    color: Color,
    background: Option<Color>,
    scale_factor: f64,
    state: ControlState,
    size_allocation: Rect,
    visible: bool,
    focusable: bool,
    focused: bool,
    parent: Option<ViewId>,
    dirty: DirtyFlags,
    dirty_rect: Option<Rect>,
}

impl ViewBase {
    /// Create a view base with the default font and a scale factor of 1.
    pub fn new() -> Self {
        Self {
            id: ViewId::new(),
            font: Font::default(),
            color: Color::BLACK,
            background: None,
            scale_factor: 1.0,
            state: ControlState::Normal,
            size_allocation: Rect::ZERO,
            visible: true,
            focusable: false,
            focused: false,
            parent: None,
            dirty: DirtyFlags::empty(),
            dirty_rect: None,
        }
    }

    /// Create a view base using the configured font and scale factor.
    pub fn from_config(config: &ToolkitConfig) -> Self {
        let mut base = Self::new();
        base.font = config.font.to_font();
        base.scale_factor = config.scale_factor;
        base
    }

    /// The unique id of this view.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The current font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Sets the font and schedules a repaint.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.invalidate();
    }

    /// The foreground color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the foreground color and schedules a repaint.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.invalidate();
    }

    /// The background color, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Sets the background color and schedules a repaint.
    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
        self.invalidate();
    }

    /// Device pixels per logical unit.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sets the scale factor. Callers are responsible for re-measuring.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// The visual state.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Sets the visual state and schedules a repaint.
    pub fn set_state(&mut self, state: ControlState) {
        self.state = state;
        self.invalidate();
    }

    /// Whether the view is disabled.
    pub fn is_disabled(&self) -> bool {
        self.state == ControlState::Disabled
    }

    /// Enables or disables the view.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.set_state(if enabled {
            ControlState::Normal
        } else {
            ControlState::Disabled
        });
    }

    /// The bounds of the view in window coordinates.
    pub fn size_allocation(&self) -> Rect {
        self.size_allocation
    }

    /// The bounds of the view relative to its own origin.
    pub fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size_allocation.size())
    }

    /// Whether `point` (window coordinates) is inside the view.
    pub fn contains(&self, point: Point) -> bool {
        self.size_allocation.contains(point)
    }

    /// Moves the view. The old and the new regions are invalidated.
    ///
    /// Returns whether the size changed; an identical rect is a no-op.
    pub fn size_allocate(&mut self, rect: Rect) -> bool {
        if rect == self.size_allocation {
            return false;
        }
        let size_changed = rect.size() != self.size_allocation.size();

        self.invalidate_rect(self.size_allocation);
        self.size_allocation = rect;
        self.invalidate_rect(self.size_allocation);

        size_changed
    }

    /// Whether the view itself is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the view. Hidden views lose focus.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.focused = false;
        }
        self.invalidate();
    }

    /// Whether the view can take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Sets whether the view can take keyboard focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether the view has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Sets the focus flag. Returns whether it changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        self.invalidate();
        true
    }

    /// The id of the parent view, if attached.
    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    /// Attaches the view to `parent`, or detaches it with `None`.
    pub fn set_parent(&mut self, parent: Option<ViewId>) {
        self.parent = parent;
        if parent.is_none() {
            self.focused = false;
        }
    }

    /// Schedules a repaint of the whole view.
    pub fn invalidate(&mut self) {
        self.invalidate_rect(self.size_allocation);
    }

    /// Schedules a repaint of `rect` (window coordinates). Empty rects are ignored.
    pub fn invalidate_rect(&mut self, rect: Rect) {
        if rect.is_zero_area() {
            return;
        }
        self.dirty_rect = Some(match self.dirty_rect {
            Some(dirty) => dirty.union(rect),
            None => rect,
        });
        self.dirty |= DirtyFlags::PAINT;
    }

    /// Pending invalidation flags.
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Pending repaint region.
    pub fn dirty_rect(&self) -> Option<Rect> {
        self.dirty_rect
    }

    /// Drains the pending invalidation.
    pub fn take_dirty(&mut self) -> (DirtyFlags, Option<Rect>) {
        let flags = std::mem::replace(&mut self.dirty, DirtyFlags::empty());
        (flags, self.dirty_rect.take())
    }
}

impl Default for ViewBase {
    fn default() -> Self {
        Self::new()
    }
}

/// The visual node contract shared by leaf views and containers.
pub trait View {
    /// The shared view state.
    fn base(&self) -> &ViewBase;

    /// The shared view state, mutably.
    fn base_mut(&mut self) -> &mut ViewBase;

    /// Return the widget type id.
    fn widget_id(&self) -> WidgetId;

    /// The instance id.
    fn id(&self) -> ViewId {
        self.base().id()
    }

    /// Places the view. Containers re-run [layout](View::layout) afterwards.
    fn size_allocate(&mut self, rect: Rect) {
        self.base_mut().size_allocate(rect);
    }

    /// Places children inside the current allocation.
    fn layout(&mut self) {}

    /// Draws the view. The painter origin is the view's top-left corner and
    /// `dirty` is relative to it.
    fn draw(&mut self, painter: &mut dyn Painter, dirty: Rect) {
        if let Some(background) = self.base().background() {
            let area = dirty.intersect(self.base().local_bounds());
            if !area.is_zero_area() {
                painter.fill_rect(area, background);
            }
        }
    }

    /// Called when the display scale factor changes.
    fn on_dpi_changed(&mut self, scale_factor: f64) {
        self.base_mut().set_scale_factor(scale_factor);
    }

    /// Sets the font.
    fn set_font(&mut self, font: Font) {
        self.base_mut().set_font(font);
    }

    /// Sets the foreground color.
    fn set_color(&mut self, color: Color) {
        self.base_mut().set_color(color);
    }

    /// Shows or hides the view.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().set_visible(visible);
    }

    /// The pointer entered the view.
    fn on_mouse_enter(&mut self, _event: &MouseEvent) {}

    /// The pointer left the view.
    fn on_mouse_leave(&mut self, _event: &MouseEvent) {}

    /// The pointer moved inside the view.
    fn on_mouse_move(&mut self, _event: &MouseEvent) {}

    /// A button was pressed or released over the view. Returns whether the
    /// event was handled; disabled views swallow clicks.
    fn on_mouse_click(&mut self, _event: &MouseEvent) -> bool {
        self.base().is_disabled()
    }

    /// Returns the container interface if this view has children.
    fn as_container_mut(&mut self) -> Option<&mut dyn ViewContainer> {
        None
    }
}

/// Child traversal for container views.
pub trait ViewContainer {
    /// Visits the children in order (or reverse order). Stops as soon as
    /// `callback` returns `false`.
    fn for_each(&mut self, reverse: bool, callback: &mut dyn FnMut(&mut dyn View) -> bool);

    /// Whether `id` is a direct child that is currently part of the tree.
    fn has_child(&self, id: ViewId) -> bool;
}

/// Draws `child` with the painter scoped to the child's bounds.
///
/// `dirty` is relative to `parent`. Hidden children are skipped.
pub fn draw_child(parent: &ViewBase, child: &mut dyn View, painter: &mut dyn Painter, dirty: Rect) {
    if !child.base().is_visible() {
        return;
    }

    let bounds = child.base().size_allocation();
    let offset = bounds.origin() - parent.size_allocation().origin();
    let local = child.base().local_bounds();
    let child_dirty = (dirty - offset).intersect(local);
    if child_dirty.is_zero_area() {
        return;
    }

    painter.save();
    painter.translate(offset);
    painter.clip_rect(local);
    child.draw(painter, child_dirty);
    painter.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_allocate_invalidates_old_and_new() {
        let mut base = ViewBase::new();
        assert!(base.size_allocate(Rect::new(0.0, 0.0, 10.0, 10.0)));
        base.take_dirty();

        // Same size, new position.
        assert!(!base.size_allocate(Rect::new(20.0, 0.0, 30.0, 10.0)));
        let (flags, rect) = base.take_dirty();
        assert!(flags.contains(DirtyFlags::PAINT));
        assert_eq!(rect, Some(Rect::new(0.0, 0.0, 30.0, 10.0)));

        // Identical rect is a no-op.
        assert!(!base.size_allocate(Rect::new(20.0, 0.0, 30.0, 10.0)));
        assert_eq!(base.dirty(), DirtyFlags::empty());
    }

    #[test]
    fn test_hidden_view_loses_focus() {
        let mut base = ViewBase::new();
        base.set_focusable(true);
        assert!(base.set_focused(true));
        base.set_visible(false);
        assert!(!base.has_focus());
    }

    #[test]
    fn test_empty_allocation_is_not_invalidated() {
        let mut base = ViewBase::new();
        base.invalidate();
        assert_eq!(base.dirty_rect(), None);
        assert!(!base.dirty().contains(DirtyFlags::PAINT));
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ViewId::new(), ViewId::new());
    }
}
