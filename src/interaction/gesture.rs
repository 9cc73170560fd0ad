//! Transient state of one press-hold-drag-release cycle

use crate::interaction::geometry::{Point, Rect, Vector};

/// Identifies one scheduled long-press timer
///
/// Every press gets a fresh token. Expiry notifications carrying a token that
/// no longer matches the pending press are stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Token with the given id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id, for hosts that key their timers by integer
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Token issued after this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Gesture in progress, created on press and dropped on release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Slot the press landed on
    pub source_slot: usize,
    /// Pointer position when the drag began (the press position until then)
    pub start_point: Point,
    /// Latest pointer position
    pub current_point: Point,
    /// True while waiting for the long-press delay to elapse
    pub pending: bool,
    /// Long-press timer owned by this gesture
    pub timer: TimerToken,
}

impl GestureSession {
    /// Session for a press on `source_slot` at `point`
    pub const fn press(source_slot: usize, point: Point, timer: TimerToken) -> Self {
        Self {
            source_slot,
            start_point: point,
            current_point: point,
            pending: true,
            timer,
        }
    }

    /// Record the latest pointer position
    pub const fn track(&mut self, point: Point) {
        self.current_point = point;
    }

    /// Leave the pending window; displacement is measured from here on
    pub const fn begin_drag(&mut self) {
        self.pending = false;
        self.start_point = self.current_point;
    }

    /// Pointer travel since the drag began
    pub fn displacement(&self) -> Vector {
        self.current_point - self.start_point
    }
}

/// Floating copy of the dragged tile, for the view layer to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragVisual {
    /// Slot whose tile is being dragged
    pub source_slot: usize,
    /// Rendered rectangle of the source slot when the drag began
    pub origin: Rect,
    /// Scale applied to the floating copy
    pub scale: f32,
    /// Current displacement from `origin`
    pub offset: Vector,
    /// Opacity of the source tile left behind on the board
    pub ghost_opacity: f32,
}
