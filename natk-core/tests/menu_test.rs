use std::cell::{Cell, RefCell};
use std::rc::Rc;

use natk_core::menu::{MenuBase, MenuItem, MenuItemHandle, MenuItemId, MenuItemType, MenuPeer};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum PeerOp {
    Init,
    Destroy,
    Insert(MenuItemId, usize),
    Remove(MenuItemId),
}

/// A peer that keeps a native-side copy of the item order and logs every call.
#[derive(Default, Clone)]
struct RecordingPeer {
    ops: Rc<RefCell<Vec<PeerOp>>>,
    mirror: Rc<RefCell<Vec<MenuItemId>>>,
}

impl MenuPeer for RecordingPeer {
    fn init(&mut self) {
        self.ops.borrow_mut().push(PeerOp::Init);
    }

    fn destroy(&mut self) {
        self.ops.borrow_mut().push(PeerOp::Destroy);
        self.mirror.borrow_mut().clear();
    }

    fn insert(&mut self, item: &MenuItemHandle, index: usize) {
        self.ops.borrow_mut().push(PeerOp::Insert(item.id(), index));
        self.mirror.borrow_mut().insert(index, item.id());
    }

    fn remove(&mut self, item: &MenuItemHandle) {
        self.ops.borrow_mut().push(PeerOp::Remove(item.id()));
        self.mirror.borrow_mut().retain(|id| *id != item.id());
    }
}

fn logical_order(menu: &MenuBase) -> Vec<MenuItemId> {
    menu.items().iter().map(|item| item.id()).collect()
}

#[test]
fn test_peer_mirrors_logical_order() {
    let peer = RecordingPeer::default();
    let mirror = peer.mirror.clone();
    let mut menu = MenuBase::new(peer);

    let a = MenuItem::with_label("A");
    let b = MenuItem::with_label("B");
    let c = MenuItem::with_label("C");

    assert!(menu.append(&a));
    assert!(menu.append(&c));
    assert!(menu.insert(&b, 1));
    assert_eq!(logical_order(&menu), vec![a.id(), b.id(), c.id()]);
    assert_eq!(*mirror.borrow(), logical_order(&menu));

    assert!(menu.remove(&a));
    assert_eq!(logical_order(&menu), vec![b.id(), c.id()]);
    assert_eq!(*mirror.borrow(), logical_order(&menu));
    assert_eq!(menu.item_at(0).map(|item| item.id()), Some(b.id()));
    assert_eq!(menu.index_of(&c), Some(1));
}

#[test]
fn test_rejected_changes_do_not_reach_peer() {
    let peer = RecordingPeer::default();
    let ops = peer.ops.clone();
    let mut menu = MenuBase::new(peer);

    let a = MenuItem::with_label("A");
    let b = MenuItem::with_label("B");
    let stranger = MenuItem::with_label("Stranger");

    assert!(menu.append(&a));
    // Already owned.
    assert!(!menu.append(&a));
    // Past the end.
    assert!(!menu.insert(&b, 2));
    assert_eq!(b.menu(), None);
    // Not a member.
    assert!(!menu.remove(&stranger));

    assert_eq!(*ops.borrow(), vec![PeerOp::Init, PeerOp::Insert(a.id(), 0)]);
    assert_eq!(menu.item_count(), 1);
}

#[test]
fn test_item_belongs_to_one_menu() {
    let mut first = MenuBase::new(RecordingPeer::default());
    let mut second = MenuBase::new(RecordingPeer::default());
    let item = MenuItem::with_label("Shared");

    assert!(first.append(&item));
    assert_eq!(item.menu(), Some(first.id()));
    assert!(!second.append(&item));

    assert!(first.remove(&item));
    assert_eq!(item.menu(), None);
    assert!(second.append(&item));
    assert_eq!(item.menu(), Some(second.id()));
}

#[test]
fn test_remove_then_insert_at_front() {
    let mut menu = MenuBase::new(RecordingPeer::default());
    let a = MenuItem::with_label("A");
    let b = MenuItem::with_label("B");

    menu.append(&a);
    menu.append(&b);
    assert!(menu.remove(&b));
    assert!(menu.insert(&b, 0));
    assert_eq!(logical_order(&menu), vec![b.id(), a.id()]);
}

#[test]
fn test_drop_clears_backlinks_and_destroys_peer() {
    let peer = RecordingPeer::default();
    let ops = peer.ops.clone();
    let item = MenuItem::with_label("Quit");

    {
        let mut menu = MenuBase::new(peer);
        menu.append(&item);
        assert!(item.menu().is_some());
    }

    assert_eq!(item.menu(), None);
    assert_eq!(ops.borrow().last(), Some(&PeerOp::Destroy));
}

#[test]
fn test_radio_group_is_exclusive() {
    let mut menu = MenuBase::new(RecordingPeer::default());
    let small = MenuItem::new(MenuItemType::Radio);
    let large = MenuItem::new(MenuItemType::Radio);
    let separator = MenuItem::separator();
    let other = MenuItem::new(MenuItemType::Radio);

    for item in [&small, &large, &separator, &other] {
        assert!(menu.append(item));
    }
    other.set_checked(true);

    assert!(menu.activate(&small));
    assert!(small.is_checked());
    assert!(menu.activate(&large));
    assert!(large.is_checked());
    assert!(!small.is_checked());
    // The separator ends the group.
    assert!(other.is_checked());
    assert!(!menu.activate(&separator));
}

#[test]
fn test_activate_emits_click() {
    let mut menu = MenuBase::new(RecordingPeer::default());
    let item = MenuItem::with_label("Save");
    let clicks = Rc::new(Cell::new(0));

    let counter = clicks.clone();
    item.on_click.connect(move |_| counter.set(counter.get() + 1));
    menu.append(&item);

    assert!(menu.activate(&item));
    item.set_enabled(false);
    assert!(!menu.activate(&item));
    assert!(!menu.activate(&MenuItem::with_label("Foreign")));
    assert_eq!(clicks.get(), 1);
}

#[derive(Debug, Clone)]
enum Change {
    Insert(usize, usize),
    Append(usize),
    Remove(usize),
}

const POOL_SIZE: usize = 6;

fn change() -> impl Strategy<Value = Change> {
    prop_oneof![
        (0..POOL_SIZE, 0..POOL_SIZE + 2).prop_map(|(item, index)| Change::Insert(item, index)),
        (0..POOL_SIZE).prop_map(Change::Append),
        (0..POOL_SIZE).prop_map(Change::Remove),
    ]
}

proptest! {
    #[test]
    fn test_peer_mirror_matches_any_change_sequence(changes in prop::collection::vec(change(), 0..40)) {
        let peer = RecordingPeer::default();
        let mirror = peer.mirror.clone();
        let mut menu = MenuBase::new(peer);
        let pool: Vec<MenuItemHandle> = (0..POOL_SIZE).map(|i| MenuItem::with_label(format!("Item {i}"))).collect();

        for change in changes {
            let before = menu.item_count();
            match change {
                Change::Insert(item, index) => {
                    let valid = pool[item].menu().is_none() && index <= before;
                    prop_assert_eq!(menu.insert(&pool[item], index), valid);
                },
                Change::Append(item) => {
                    let valid = pool[item].menu().is_none();
                    prop_assert_eq!(menu.append(&pool[item]), valid);
                },
                Change::Remove(item) => {
                    let valid = pool[item].menu() == Some(menu.id());
                    prop_assert_eq!(menu.remove(&pool[item]), valid);
                },
            }

            prop_assert_eq!(&*mirror.borrow(), &logical_order(&menu));
            for item in &pool {
                prop_assert_eq!(item.menu().is_some(), menu.index_of(item).is_some());
            }
        }
    }
}
