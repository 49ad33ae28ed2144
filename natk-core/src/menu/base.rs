use std::rc::Rc;

use crate::menu::item::{MenuItemHandle, MenuItemType};
use crate::menu::peer::MenuPeer;
use crate::menu::MenuId;

/// An ordered list of menu items mirrored by a platform [MenuPeer].
///
/// Every structural change is applied to both the logical list and the peer,
/// or to neither. Items are not owned: removing an item (or dropping the menu)
/// only clears the item's backlink.
pub struct MenuBase {
    id: MenuId,
    items: Vec<MenuItemHandle>,
    peer: Box<dyn MenuPeer>,
}

impl MenuBase {
    /// Creates a menu backed by `peer` and initializes the native side.
    pub fn new(peer: impl MenuPeer + 'static) -> Self {
        let mut peer: Box<dyn MenuPeer> = Box::new(peer);
        peer.init();
        Self {
            id: MenuId::next(),
            items: Vec::new(),
            peer,
        }
    }

    /// The unique id of this menu, as stored in its items' backlinks.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Appends `item`. Same as `insert(item, item_count())`.
    pub fn append(&mut self, item: &MenuItemHandle) -> bool {
        self.insert(item, self.item_count())
    }

    /// Inserts `item` at `index`.
    ///
    /// Does nothing and returns `false` if the item already belongs to a menu
    /// or `index` is greater than the item count.
    pub fn insert(&mut self, item: &MenuItemHandle, index: usize) -> bool {
        if item.menu().is_some() || index > self.item_count() {
            log::trace!("Menu {:?}: ignoring insert of {:?} at {}", self.id, item.id(), index);
            return false;
        }

        // Logical state first, so a peer that reads it back sees the new item.
        self.items.insert(index, item.clone());
        item.set_menu(Some(self.id));
        self.peer.insert(item, index);

        log::debug!("Menu {:?}: inserted {:?} at {}", self.id, item.id(), index);
        true
    }

    /// Removes `item`. Does nothing and returns `false` if it is not in this menu.
    pub fn remove(&mut self, item: &MenuItemHandle) -> bool {
        let Some(index) = self.index_of(item) else {
            log::trace!("Menu {:?}: ignoring removal of foreign {:?}", self.id, item.id());
            return false;
        };

        // The peer still sees the item in place while removing its entry.
        self.peer.remove(item);
        item.set_menu(None);
        self.items.remove(index);

        log::debug!("Menu {:?}: removed {:?} from {}", self.id, item.id(), index);
        true
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item at `index`.
    pub fn item_at(&self, index: usize) -> Option<&MenuItemHandle> {
        self.items.get(index)
    }

    /// The items in order.
    pub fn items(&self) -> &[MenuItemHandle] {
        &self.items
    }

    /// Index of `item` by identity.
    pub fn index_of(&self, item: &MenuItemHandle) -> Option<usize> {
        self.items.iter().position(|it| Rc::ptr_eq(it, item))
    }

    /// Clicks `item` as the platform would.
    ///
    /// A radio item unchecks the other radio items of its group, the run of
    /// adjacent radio items around it. Returns `false` for foreign, disabled
    /// or separator items.
    pub fn activate(&self, item: &MenuItemHandle) -> bool {
        let Some(index) = self.index_of(item) else {
            return false;
        };
        if !item.is_enabled() || item.item_type() == MenuItemType::Separator {
            return false;
        }

        if item.item_type() == MenuItemType::Radio {
            let is_radio = |it: &&MenuItemHandle| it.item_type() == MenuItemType::Radio;
            let before = self.items[..index].iter().rev().take_while(is_radio);
            let after = self.items[index + 1..].iter().take_while(is_radio);
            for sibling in before.chain(after) {
                sibling.set_checked(false);
            }
        }

        item.click()
    }
}

impl Drop for MenuBase {
    fn drop(&mut self) {
        for item in &self.items {
            item.set_menu(None);
        }
        self.peer.destroy();
    }
}

impl std::fmt::Debug for MenuBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBase")
            .field("id", &self.id)
            .field("items", &self.items)
            .finish()
    }
}
