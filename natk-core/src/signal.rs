//! Synchronous observer lists.
//!
//! A [Signal] keeps its slots in connection order and calls them in that order
//! on [emit](Signal::emit). Slots may connect or disconnect slots of the same
//! signal while it is being emitted: new slots run from the next emission,
//! removed slots are dropped once the current emission finishes.

use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;

/// Handle returned by [Signal::connect].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

type Slot<T> = Box<dyn FnMut(&T)>;

/// An ordered list of callbacks receiving `&T`.
pub struct Signal<T: ?Sized> {
    next_id: Cell<u64>,
    slots: RefCell<IndexMap<SlotId, Slot<T>>>,
    removed: RefCell<Vec<SlotId>>,
    running: RefCell<Vec<SlotId>>,
    emitting: Cell<bool>,
}

impl<T: ?Sized> Signal<T> {
    /// Create a signal with no slots.
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            slots: RefCell::new(IndexMap::new()),
            removed: RefCell::new(Vec::new()),
            running: RefCell::new(Vec::new()),
            emitting: Cell::new(false),
        }
    }

    /// Adds a slot. Returns the id used to disconnect it.
    pub fn connect(&self, slot: impl FnMut(&T) + 'static) -> SlotId {
        let id = SlotId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.slots.borrow_mut().insert(id, Box::new(slot));
        id
    }

    /// Removes a slot. Returns whether it was connected.
    pub fn disconnect(&self, id: SlotId) -> bool {
        if id.0 >= self.next_id.get() || self.removed.borrow().contains(&id) {
            return false;
        }
        if self.emitting.get() {
            let connected = self.slots.borrow().contains_key(&id) || self.running.borrow().contains(&id);
            if connected {
                // The slot may be running right now; drop it afterwards.
                self.removed.borrow_mut().push(id);
            }
            return connected;
        }
        self.slots.borrow_mut().shift_remove(&id).is_some()
    }

    /// Removes every slot.
    pub fn disconnect_all(&self) {
        if self.emitting.get() {
            let mut ids: Vec<SlotId> = self.slots.borrow().keys().copied().collect();
            ids.extend(self.running.borrow().iter().copied());
            self.removed.borrow_mut().extend(ids);
        } else {
            self.slots.borrow_mut().clear();
        }
    }

    /// Calls every slot with `value`, in connection order.
    pub fn emit(&self, value: &T) {
        let mut running = std::mem::take(&mut *self.slots.borrow_mut());
        let was_emitting = self.emitting.replace(true);
        let mark = self.running.borrow().len();
        self.running.borrow_mut().extend(running.keys().copied());

        for (id, slot) in running.iter_mut() {
            if self.removed.borrow().contains(id) {
                continue;
            }
            slot(value);
        }

        self.running.borrow_mut().truncate(mark);
        self.emitting.set(was_emitting);

        let mut slots = self.slots.borrow_mut();
        let connected_meanwhile = std::mem::replace(&mut *slots, running);
        slots.extend(connected_meanwhile);
        if !was_emitting {
            for id in self.removed.borrow_mut().drain(..) {
                slots.shift_remove(&id);
            }
        }
    }

    /// Whether no slot is connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of connected slots.
    pub fn len(&self) -> usize {
        let removed = self.removed.borrow();
        self.slots
            .borrow()
            .keys()
            .filter(|id| !removed.contains(id))
            .count()
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for Signal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("slots", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_connection_order() {
        let signal = Signal::<i32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = log.clone();
        signal.connect(move |v| first.borrow_mut().push(("first", *v)));
        let second = log.clone();
        signal.connect(move |v| second.borrow_mut().push(("second", *v)));

        signal.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = signal.connect(move |_| counter.set(counter.get() + 1));

        signal.emit(&());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(&());

        assert_eq!(hits.get(), 1);
        assert!(signal.is_empty());
    }

    #[test]
    fn test_connect_during_emit_runs_next_time() {
        let signal = Rc::new(Signal::<()>::new());
        let hits = Rc::new(Cell::new(0));

        let inner_signal = Rc::downgrade(&signal);
        let counter = hits.clone();
        let mut connected = false;
        signal.connect(move |_| {
            if !connected {
                connected = true;
                let counter = counter.clone();
                if let Some(signal) = inner_signal.upgrade() {
                    signal.connect(move |_| counter.set(counter.get() + 1));
                }
            }
        });

        signal.emit(&());
        assert_eq!(hits.get(), 0);
        assert_eq!(signal.len(), 2);

        signal.emit(&());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_disconnect_during_emit_reports_connection() {
        let signal = Rc::new(Signal::<()>::new());
        let stale = signal.connect(|_| {});
        assert!(signal.disconnect(stale));

        let answers = Rc::new(RefCell::new(Vec::new()));
        let inner_signal = Rc::downgrade(&signal);
        let sink = answers.clone();
        let own = Rc::new(Cell::new(None));
        let own_id = own.clone();
        let id = signal.connect(move |_| {
            if let (Some(signal), Some(id)) = (inner_signal.upgrade(), own_id.get()) {
                sink.borrow_mut().push(signal.disconnect(stale));
                sink.borrow_mut().push(signal.disconnect(id));
                sink.borrow_mut().push(signal.disconnect(id));
            }
        });
        own.set(Some(id));

        signal.emit(&());
        assert_eq!(*answers.borrow(), vec![false, true, false]);
        assert!(signal.is_empty());
    }
}
