#![warn(missing_docs)]

//! Widget library for natk => See `natk` crate.
//!
//! Contains the tabbed view and simple page views.

/// Contains the [tab::Tab] widget and its strip.
pub mod tab;

/// Contains the [panel::Panel] widget.
pub mod panel;
