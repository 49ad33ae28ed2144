#![warn(missing_docs)]

//! Core library for natk => See `natk` crate.
//!
//! Contains the view model shared by leaf views and containers, the painter
//! and text measurement seams, signals, focus traversal and the
//! platform-mirrored menu container.

pub use vello::kurbo;
pub use vello::peniko;

/// Contains the [ToolkitConfig](config::ToolkitConfig) struct.
pub mod config;

/// Contains configuration error types.
pub mod error;

/// Contains pointer event types.
pub mod event;

/// Contains focus management functionality.
pub mod focus;

/// Contains fonts and the text measurement seam.
pub mod font;

/// Contains headless metrics and painter backends.
pub mod headless;

/// Contains the menu container and its platform peer seam.
pub mod menu;

/// Contains the painter seam used by views to draw.
pub mod painter;

/// Contains the observer [Signal](signal::Signal).
pub mod signal;

/// Contains the core view functionalities.
pub mod view;
