//! Input-type-agnostic pointer events
//!
//! Mouse, touch and pen input are reported through the same three actions.
//! Touch-end events that carry no coordinates should be reported at the last
//! known pointer position.

use crate::interaction::geometry::Point;

/// Physical device behind a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad
    Mouse,
    /// Finger on a touch screen
    Touch,
    /// Stylus
    Pen,
}

impl PointerKind {
    /// Parse a DOM-style `pointerType` string
    pub fn from_pointer_type(value: &str) -> Option<Self> {
        match value {
            "mouse" => Some(Self::Mouse),
            "touch" => Some(Self::Touch),
            "pen" => Some(Self::Pen),
            _ => None,
        }
    }
}

/// What the pointer did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Pressed down
    Down,
    /// Moved while tracked
    Move,
    /// Lifted
    Up,
}

/// A pointer event in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What the pointer did
    pub action: PointerAction,
    /// Where it happened
    pub position: Point,
    /// Device that produced it
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Press at `(x, y)`
    pub const fn down(kind: PointerKind, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, kind, x, y)
    }

    /// Move to `(x, y)`
    pub const fn moved(kind: PointerKind, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, kind, x, y)
    }

    /// Release at `(x, y)`
    pub const fn up(kind: PointerKind, x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, kind, x, y)
    }

    const fn new(action: PointerAction, kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point::new(x, y),
            kind,
        }
    }
}
