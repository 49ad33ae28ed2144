use crate::menu::item::MenuItemHandle;

/// The platform side of a menu.
///
/// A peer mirrors the logical item sequence of its [MenuBase](crate::menu::MenuBase)
/// exactly: same items, same order, same indices.
pub trait MenuPeer {
    /// Creates the native menu.
    fn init(&mut self);

    /// Destroys the native menu.
    fn destroy(&mut self);

    /// Inserts the native entry for `item` at `index`.
    fn insert(&mut self, item: &MenuItemHandle, index: usize);

    /// Removes the native entry for `item`.
    fn remove(&mut self, item: &MenuItemHandle);
}

/// A peer that does nothing, for menus that are never shown natively.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMenuPeer;

impl MenuPeer for NullMenuPeer {
    fn init(&mut self) {}

    fn destroy(&mut self) {}

    fn insert(&mut self, _item: &MenuItemHandle, _index: usize) {}

    fn remove(&mut self, _item: &MenuItemHandle) {}
}
