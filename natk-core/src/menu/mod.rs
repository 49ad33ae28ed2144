//! Menus mirrored by a platform peer.
//!
//! A [MenuBase] owns the logical order of its items and forwards every
//! structural change to a [MenuPeer], which maintains the native menu.
//!
//! ```rust
//! use natk_core::menu::{MenuBase, MenuItem, NullMenuPeer};
//!
//! let mut menu = MenuBase::new(NullMenuPeer);
//! let open = MenuItem::with_label("Open");
//! assert!(menu.append(&open));
//! assert_eq!(open.menu(), Some(menu.id()));
//!
//! // An item belongs to one menu at a time.
//! assert!(!menu.append(&open));
//! assert!(menu.remove(&open));
//! assert_eq!(open.menu(), None);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Contains the [MenuBase] container.
pub mod base;
/// Contains [MenuItem] and its handle type.
pub mod item;
/// Contains the [MenuPeer] seam.
pub mod peer;

pub use base::MenuBase;
pub use item::{MenuItem, MenuItemHandle, MenuItemId, MenuItemType};
pub use peer::{MenuPeer, NullMenuPeer};

/// Unique identifier of a menu, used as the item-to-menu backlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(u64);

impl MenuId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
