use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::menu::MenuId;
use crate::signal::Signal;

/// A shared, non-owned handle to a menu item.
pub type MenuItemHandle = Rc<MenuItem>;

/// Unique identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuItemId(u64);

impl MenuItemId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The kind of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemType {
    /// A plain clickable label.
    Label,
    /// A label with a check mark toggled on click.
    Checkbox,
    /// A check mark exclusive within its group of adjacent radio items.
    Radio,
    /// A horizontal separator line.
    Separator,
    /// A label that opens a submenu.
    Submenu,
}

/// An entry of a menu or menu bar.
///
/// Items are shared through [MenuItemHandle]s. An item belongs to at most one
/// menu at a time; only that menu sets and clears the backlink returned by
/// [menu](MenuItem::menu).
pub struct MenuItem {
    id: MenuItemId,
    item_type: MenuItemType,
    label: RefCell<String>,
    enabled: Cell<bool>,
    checked: Cell<bool>,
    visible: Cell<bool>,
    menu: Cell<Option<MenuId>>,
    /// Emitted after the item has been clicked.
    pub on_click: Signal<MenuItem>,
}

impl MenuItem {
    /// Create a new item of the given type.
    pub fn new(item_type: MenuItemType) -> MenuItemHandle {
        Rc::new(Self {
            id: MenuItemId::next(),
            item_type,
            label: RefCell::new(String::new()),
            enabled: Cell::new(true),
            checked: Cell::new(false),
            visible: Cell::new(true),
            menu: Cell::new(None),
            on_click: Signal::new(),
        })
    }

    /// Create a label item.
    pub fn with_label(label: impl Into<String>) -> MenuItemHandle {
        let item = Self::new(MenuItemType::Label);
        item.set_label(label);
        item
    }

    /// Create a separator.
    pub fn separator() -> MenuItemHandle {
        Self::new(MenuItemType::Separator)
    }

    /// The unique id of this item.
    pub fn id(&self) -> MenuItemId {
        self.id
    }

    /// The kind of this item.
    pub fn item_type(&self) -> MenuItemType {
        self.item_type
    }

    /// The label text.
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// Sets the label text.
    pub fn set_label(&self, label: impl Into<String>) {
        *self.label.borrow_mut() = label.into();
    }

    /// Whether the item reacts to clicks.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enables or disables the item.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Whether the check mark is shown. Only meaningful for checkbox and radio items.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Sets the check mark.
    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    /// Whether the item is shown.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Shows or hides the item.
    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// The menu this item belongs to.
    pub fn menu(&self) -> Option<MenuId> {
        self.menu.get()
    }

    pub(crate) fn set_menu(&self, menu: Option<MenuId>) {
        self.menu.set(menu);
    }

    /// Simulates a click: toggles checkboxes, checks radio items and emits
    /// [on_click](MenuItem::on_click). Disabled items and separators ignore it.
    ///
    /// Radio exclusivity needs the sibling items; use
    /// [MenuBase::activate](crate::menu::MenuBase::activate) for items inside a menu.
    pub fn click(&self) -> bool {
        if !self.is_enabled() || self.item_type == MenuItemType::Separator {
            return false;
        }
        match self.item_type {
            MenuItemType::Checkbox => self.set_checked(!self.is_checked()),
            MenuItemType::Radio => self.set_checked(true),
            _ => {},
        }
        self.on_click.emit(self);
        true
    }
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("type", &self.item_type)
            .field("label", &*self.label.borrow())
            .field("menu", &self.menu.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_toggles() {
        let item = MenuItem::new(MenuItemType::Checkbox);
        assert!(item.click());
        assert!(item.is_checked());
        assert!(item.click());
        assert!(!item.is_checked());
    }

    #[test]
    fn test_disabled_and_separator_ignore_click() {
        let clicks = Rc::new(Cell::new(0));

        let item = MenuItem::with_label("Open");
        let counter = clicks.clone();
        item.on_click.connect(move |_| counter.set(counter.get() + 1));
        item.set_enabled(false);
        assert!(!item.click());

        assert!(!MenuItem::separator().click());
        assert_eq!(clicks.get(), 0);
    }
}
