use crate::view::{View, ViewContainer, ViewId};

/// Tracks the focused view of a window and moves focus through the view tree.
///
/// Views are addressed by [ViewId]; the manager never holds references into
/// the tree, so every operation that touches views takes the root.
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<ViewId>,
}

impl FocusManager {
    /// Create a new focus manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused view.
    pub fn focused(&self) -> Option<ViewId> {
        self.focused
    }

    /// Forgets `id` if it is the focused view, e.g. when it is detached.
    pub fn remove_focus(&mut self, id: ViewId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Moves focus to the view `id` inside `root`.
    ///
    /// Returns `false` and leaves focus untouched if the view is not found,
    /// hidden or not focusable.
    pub fn focus_view(&mut self, root: &mut dyn View, id: ViewId) -> bool {
        if self.focused == Some(id) {
            return true;
        }

        let mut focusable = false;
        walk(root, &mut |view: &mut dyn View| {
            if view.id() == id {
                focusable = view.base().is_focusable() && view.base().is_visible();
                return false;
            }
            true
        });
        if !focusable {
            log::trace!("Refusing to focus view {:?}", id);
            return false;
        }

        let previous = self.focused;
        walk(root, &mut |view: &mut dyn View| {
            if Some(view.id()) == previous {
                view.base_mut().set_focused(false);
            } else if view.id() == id {
                view.base_mut().set_focused(true);
            }
            true
        });
        self.focused = Some(id);
        true
    }

    /// Moves focus to the next (or previous) focusable view inside `root`,
    /// wrapping around once. Hidden views and their children are skipped, and
    /// a focused view that is no longer shown is forgotten first.
    ///
    /// Returns whether a view received focus. Non-container roots are ignored.
    pub fn advance_focus(&mut self, root: &mut dyn View, reverse: bool) -> bool {
        // A focused view that got hidden, or hidden with an ancestor, starts over.
        if let Some(id) = self.focused.filter(|id| !shows(root, *id)) {
            log::trace!("Focused view {:?} is no longer shown", id);
            self.focused = None;
        }

        let Some(container) = root.as_container_mut() else {
            return false;
        };

        let mut focus_on_next_view = self.focused.is_none();
        let found = advance(container, reverse, &mut self.focused, &mut focus_on_next_view);

        // Search again from the start.
        if !found && focus_on_next_view && self.focused.is_some() {
            self.focused = None;
            return advance(container, reverse, &mut self.focused, &mut focus_on_next_view);
        }

        found
    }
}

fn advance(
    container: &mut dyn ViewContainer,
    reverse: bool,
    focused: &mut Option<ViewId>,
    focus_on_next_view: &mut bool,
) -> bool {
    let mut result = false;
    container.for_each(reverse, &mut |child: &mut dyn View| {
        if !child.base().is_visible() {
            return true;
        }

        if let Some(inner) = child.as_container_mut() {
            if advance(inner, reverse, focused, focus_on_next_view) {
                result = true;
                return false;
            }
        }

        if Some(child.id()) == *focused {
            // Either a later view takes focus or the search wraps around.
            child.base_mut().set_focused(false);
            *focus_on_next_view = true;
        } else if *focus_on_next_view && child.base().is_focusable() {
            child.base_mut().set_focused(true);
            *focused = Some(child.id());
            result = true;
            return false;
        }
        true
    });
    result
}

/// Whether `id` is `view` or one of its descendants reachable through visible views only.
fn shows(view: &mut dyn View, id: ViewId) -> bool {
    if !view.base().is_visible() {
        return false;
    }
    if view.id() == id {
        return true;
    }
    let Some(container) = view.as_container_mut() else {
        return false;
    };

    let mut found = false;
    container.for_each(false, &mut |child: &mut dyn View| {
        found = shows(child, id);
        !found
    });
    found
}

/// Visits `view` and all of its descendants until `callback` returns `false`.
fn walk(view: &mut dyn View, callback: &mut dyn FnMut(&mut dyn View) -> bool) -> bool {
    if !callback(view) {
        return false;
    }
    let Some(container) = view.as_container_mut() else {
        return true;
    };

    let mut keep_going = true;
    container.for_each(false, &mut |child: &mut dyn View| {
        keep_going = walk(child, callback);
        keep_going
    });
    keep_going
}
