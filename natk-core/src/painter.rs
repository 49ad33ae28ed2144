use natk_theme::state::{ControlState, ThemePart};
use vello::kurbo::{Rect, Vec2};
use vello::peniko::Color;

use crate::font::Font;

/// Text alignment along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left or top.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right or bottom.
    End,
}

/// How a run of text is drawn into a rectangle.
#[derive(Debug, Clone)]
pub struct TextAttributes {
    /// The font.
    pub font: Font,
    /// The text color.
    pub color: Color,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Vertical alignment.
    pub valign: TextAlign,
}

impl TextAttributes {
    /// Attributes centering the text on both axes.
    pub fn centered(font: Font, color: Color) -> Self {
        Self {
            font,
            color,
            align: TextAlign::Center,
            valign: TextAlign::Center,
        }
    }
}

/// Drawing surface handed to views, in device pixels.
///
/// Coordinates are relative to the current origin, which containers move with
/// [translate](Painter::translate) inside a [save](Painter::save) /
/// [restore](Painter::restore) pair when drawing children.
pub trait Painter {
    /// Pushes the current origin and clip.
    fn save(&mut self);

    /// Pops the origin and clip pushed by the last [save](Painter::save).
    fn restore(&mut self);

    /// Moves the origin.
    fn translate(&mut self, offset: Vec2);

    /// Intersects the clip with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Paints the native themed background of `part` in `state`.
    fn draw_native_theme(&mut self, part: ThemePart, state: ControlState, rect: Rect);

    /// Draws `text` inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, attributes: &TextAttributes);
}
