use std::fmt::{Display, Formatter};
use std::sync::Arc;

use vello::kurbo::Size;

/// A font description: family name and size in logical units.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
}

impl Font {
    /// Create a new font.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Arc::from(family.into()),
            size,
        }
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The font size in logical units.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", 12.0)
    }
}

impl Display for Font {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

/// Text measurement service provided by the platform.
///
/// Extents are returned in logical units; views multiply them by their scale
/// factor to get device pixels.
pub trait TextMetrics {
    /// Measures the extent of `text` rendered with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}
