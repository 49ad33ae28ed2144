//! Platform-free backends: deterministic text metrics and a painter that
//! records what it is asked to draw. Used for headless embedding and tests.

use natk_theme::palette::{NativeTheme, Palette, PartStyle};
use natk_theme::state::{ControlState, ThemePart};
use vello::kurbo::{Rect, Size, Vec2};
use vello::peniko::Color;

use crate::font::{Font, TextMetrics};
use crate::painter::{Painter, TextAttributes};

/// Text metrics where every character has the same advance.
///
/// Advance and line height are fractions of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    advance: f64,
    line_height: f64,
}

impl FixedMetrics {
    /// Create metrics from the per-character advance and the line height,
    /// both relative to the font size.
    pub fn new(advance: f64, line_height: f64) -> Self {
        Self { advance, line_height }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.5)
    }
}

impl TextMetrics for FixedMetrics {
    fn measure_text(&self, text: &str, font: &Font) -> Size {
        let size = font.size() as f64;
        Size::new(text.chars().count() as f64 * size * self.advance, size * self.line_height)
    }
}

/// A drawing operation captured by [RecordingPainter], in absolute coordinates.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// A solid fill.
    Fill {
        /// Target rect.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A themed background.
    Themed {
        /// The themed part.
        part: ThemePart,
        /// The state it was drawn in.
        state: ControlState,
        /// Target rect.
        rect: Rect,
        /// The style resolved from the native theme.
        style: PartStyle,
    },
    /// A run of text.
    Text {
        /// The text.
        text: String,
        /// Target rect.
        rect: Rect,
        /// How it was drawn.
        attributes: TextAttributes,
    },
}

#[derive(Debug, Clone, Copy)]
struct PainterState {
    origin: Vec2,
    clip: Option<Rect>,
}

/// A [Painter] that records commands instead of rasterizing them.
pub struct RecordingPainter {
    theme: Box<dyn NativeTheme>,
    state: PainterState,
    stack: Vec<PainterState>,
    commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    /// Create a painter resolving themed parts with the light palette.
    pub fn new() -> Self {
        Self::with_theme(Palette::light())
    }

    /// Create a painter resolving themed parts with `theme`.
    pub fn with_theme(theme: impl NativeTheme + 'static) -> Self {
        Self {
            theme: Box::new(theme),
            state: PainterState {
                origin: Vec2::ZERO,
                clip: None,
            },
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// The recorded commands, in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forgets the recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The themed backgrounds drawn for `part`, as `(state, rect)` pairs.
    pub fn themed(&self, part: ThemePart) -> Vec<(ControlState, Rect)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Themed { part: p, state, rect, .. } if *p == part => Some((*state, *rect)),
                _ => None,
            })
            .collect()
    }

    /// The texts drawn, as `(text, rect)` pairs.
    pub fn texts(&self) -> Vec<(String, Rect)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, rect, .. } => Some((text.clone(), *rect)),
                _ => None,
            })
            .collect()
    }

    /// The current clip in absolute coordinates.
    pub fn current_clip(&self) -> Option<Rect> {
        self.state.clip
    }

    fn to_absolute(&self, rect: Rect) -> Rect {
        rect + self.state.origin
    }
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("RecordingPainter: restore without matching save"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.origin += offset;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let rect = self.to_absolute(rect);
        self.state.clip = Some(match self.state.clip {
            Some(clip) => clip.intersect(rect),
            None => rect,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.to_absolute(rect);
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn draw_native_theme(&mut self, part: ThemePart, state: ControlState, rect: Rect) {
        let rect = self.to_absolute(rect);
        let style = self.theme.part_style(part, state);
        self.commands.push(DrawCommand::Themed {
            part,
            state,
            rect,
            style,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, attributes: &TextAttributes) {
        let rect = self.to_absolute(rect);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            attributes: attributes.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_metrics_scale_with_font() {
        let metrics = FixedMetrics::default();
        let font = Font::new("mono", 12.0);
        assert_eq!(metrics.measure_text("Home", &font), Size::new(24.0, 18.0));
        assert_eq!(metrics.measure_text("Home", &font.with_size(24.0)), Size::new(48.0, 36.0));
    }

    #[test]
    fn test_save_restore_translation() {
        let mut painter = RecordingPainter::new();
        painter.save();
        painter.translate(Vec2::new(10.0, 5.0));
        painter.clip_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
        painter.draw_native_theme(ThemePart::TabItem, ControlState::Hovered, Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(painter.current_clip(), Some(Rect::new(10.0, 5.0, 30.0, 25.0)));
        painter.restore();
        painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        assert_eq!(
            painter.themed(ThemePart::TabItem),
            vec![(ControlState::Hovered, Rect::new(10.0, 5.0, 14.0, 9.0))]
        );
        assert_eq!(painter.current_clip(), None);
        assert_eq!(painter.commands().len(), 2);
    }
}
