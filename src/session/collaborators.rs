//! Interfaces to the layers outside the puzzle core
//!
//! Rendering, timers, haptics and the win banner belong to the host. The
//! session talks to them only through these traits.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::interaction::geometry::{GridOffset, Point, Rect, Vector};
use crate::interaction::gesture::{DragVisual, TimerToken};

/// Maps slots to screen rectangles and back
pub trait Layout {
    /// Rendered rectangle of `slot` on an N×N board with `rows` rows
    fn slot_rect(&self, slot: usize, rows: usize) -> Rect;

    /// Slot whose rectangle contains `point`, if any
    fn slot_at(&self, point: Point, rows: usize) -> Option<usize> {
        (0..rows * rows).find(|&slot| self.slot_rect(slot, rows).contains(point))
    }
}

/// One-shot delayed callbacks
///
/// When a scheduled timer expires the host reports it with
/// [`crate::session::PuzzleSession::long_press_elapsed`].
pub trait Scheduler {
    /// Arrange for `token` to be reported after `delay`
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Drop a scheduled timer; unknown tokens are ignored
    fn cancel(&mut self, token: TimerToken);
}

/// Short vibration when a tile lands on its home slot
pub trait Haptics {
    /// Request a pulse of the given length; no-op where unsupported
    fn pulse(&mut self, duration: Duration);
}

/// Win announcement, notified once per session
pub trait WinBanner {
    /// Show the puzzle-complete banner
    fn show(&mut self);
}

/// Visual updates driven by the controller
///
/// Every method defaults to a no-op so hosts implement only what they draw.
pub trait PuzzleView {
    /// Floating drag visual appeared; the source tile is ghosted
    fn drag_started(&mut self, _visual: &DragVisual) {}

    /// Floating drag visual moved by `delta` from its origin
    fn drag_moved(&mut self, _delta: Vector) {}

    /// Floating drag visual removed and the source tile restored
    fn drag_ended(&mut self, _source_slot: usize) {}

    /// Tile `tile` (home index) should animate to its new running offset
    fn tile_moved(&mut self, _tile: usize, _offset: GridOffset) {}
}

/// Collaborator that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Haptics for NoFeedback {
    fn pulse(&mut self, _duration: Duration) {}
}

impl WinBanner for NoFeedback {
    fn show(&mut self) {}
}

impl PuzzleView for NoFeedback {}

/// Square tiles laid out edge to edge from a fixed origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGridLayout {
    origin: Point,
    tile_width: f32,
    tile_height: f32,
}

impl UniformGridLayout {
    /// Grid with its top-left corner at `origin`
    pub const fn new(origin: Point, tile_width: f32, tile_height: f32) -> Self {
        Self {
            origin,
            tile_width,
            tile_height,
        }
    }
}

impl Layout for UniformGridLayout {
    fn slot_rect(&self, slot: usize, rows: usize) -> Rect {
        let (col, row) = if rows == 0 {
            (0, 0)
        } else {
            (slot % rows, slot / rows)
        };
        Rect::new(
            (col as f32).mul_add(self.tile_width, self.origin.x),
            (row as f32).mul_add(self.tile_height, self.origin.y),
            self.tile_width,
            self.tile_height,
        )
    }

    fn slot_at(&self, point: Point, rows: usize) -> Option<usize> {
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 {
            return None;
        }
        let col = ((point.x - self.origin.x) / self.tile_width).floor();
        let row = ((point.y - self.origin.y) / self.tile_height).floor();
        let side = 0.0..rows as f32;
        // NaN coordinates fall outside every range
        if !side.contains(&col) || !side.contains(&row) {
            return None;
        }
        Some(row as usize * rows + col as usize)
    }
}

/// Scheduler for hosts that poll a clock from their event loop
#[derive(Debug, Clone, Default)]
pub struct DeadlineScheduler {
    deadlines: Vec<(TimerToken, Instant)>,
}

impl DeadlineScheduler {
    /// Scheduler with no pending timers
    pub const fn new() -> Self {
        Self {
            deadlines: Vec::new(),
        }
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn expired(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(TimerToken, Instant)> = Vec::new();
        self.deadlines.retain(|&(token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(token, _)| token).collect()
    }

    /// Tokens still waiting to expire
    pub fn pending(&self) -> impl Iterator<Item = TimerToken> + '_ {
        self.deadlines.iter().map(|&(token, _)| token)
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        let Some(deadline) = Instant::now().checked_add(delay) else {
            warn!(timer = token.id(), ?delay, "Timer delay out of range, not scheduled");
            return;
        };
        self.deadlines.push((token, deadline));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.deadlines.retain(|&(pending, _)| pending != token);
    }
}

/// The host-side collaborators a session drives
pub struct Collaborators {
    /// Slot geometry and hit testing
    pub layout: Box<dyn Layout>,
    /// Long-press timers
    pub scheduler: Box<dyn Scheduler>,
    /// Home-slot landing feedback
    pub haptics: Box<dyn Haptics>,
    /// Win announcement
    pub banner: Box<dyn WinBanner>,
    /// Drag visual and tile animations
    pub view: Box<dyn PuzzleView>,
}

impl Collaborators {
    /// Layout and scheduler, with silent haptics, banner and view
    pub fn new(layout: impl Layout + 'static, scheduler: impl Scheduler + 'static) -> Self {
        Self {
            layout: Box::new(layout),
            scheduler: Box::new(scheduler),
            haptics: Box::new(NoFeedback),
            banner: Box::new(NoFeedback),
            view: Box::new(NoFeedback),
        }
    }

    /// Replace the haptics collaborator
    #[must_use]
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Replace the win banner collaborator
    #[must_use]
    pub fn with_banner(mut self, banner: impl WinBanner + 'static) -> Self {
        self.banner = Box::new(banner);
        self
    }

    /// Replace the view collaborator
    #[must_use]
    pub fn with_view(mut self, view: impl PuzzleView + 'static) -> Self {
        self.view = Box::new(view);
        self
    }
}
