//! # Widget Identifiers
//!
//! Widget IDs name a widget *type* (not an instance) so that themes and logs
//! can refer to it. An ID consists of a namespace, usually the crate name, and
//! the widget type name.
//!
//! ```rust
//! use natk_theme::id::WidgetId;
//!
//! let tab_id = WidgetId::new("natk-widgets", "Tab");
//! assert_eq!(tab_id.namespace(), "natk-widgets");
//! assert_eq!(tab_id.id(), "Tab");
//! assert_eq!(tab_id.to_string(), "natk-widgets:Tab");
//! ```

use std::fmt::{Debug, Display, Formatter};

/// An identifier for a widget type in the theming system.
///
/// Instance identity is handled by `natk_core::view::ViewId`; a `WidgetId` is
/// shared by every instance of the same widget type.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
