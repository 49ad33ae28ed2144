use vello::kurbo::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary (usually left) button.
    Left,
    /// The secondary (usually right) button.
    Right,
    /// The middle button or wheel click.
    Middle,
}

/// The kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A button was pressed.
    MouseDown,
    /// A button was released.
    MouseUp,
    /// The pointer moved.
    MouseMove,
    /// The pointer entered a view.
    MouseEnter,
    /// The pointer left a view.
    MouseLeave,
}

/// A pointer event in window coordinates (device pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: EventType,
    /// The button involved, if any.
    pub button: Option<MouseButton>,
    /// Pointer position.
    pub position: Point,
}

impl MouseEvent {
    /// A button press at `position`.
    pub fn down(button: MouseButton, position: Point) -> Self {
        Self {
            kind: EventType::MouseDown,
            button: Some(button),
            position,
        }
    }

    /// A button release at `position`.
    pub fn up(button: MouseButton, position: Point) -> Self {
        Self {
            kind: EventType::MouseUp,
            button: Some(button),
            position,
        }
    }

    /// A pointer motion to `position`.
    pub fn moved(position: Point) -> Self {
        Self {
            kind: EventType::MouseMove,
            button: None,
            position,
        }
    }

    /// Returns a copy of this event with a different kind, keeping the position.
    pub fn with_kind(self, kind: EventType) -> Self {
        Self { kind, ..self }
    }

    /// Whether this is a press of the primary button.
    pub fn is_primary_down(&self) -> bool {
        self.kind == EventType::MouseDown && self.button == Some(MouseButton::Left)
    }
}
