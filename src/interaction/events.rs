//! Effects emitted by the drag controller for the host to carry out

use std::time::Duration;

use crate::interaction::geometry::{GridOffset, Vector};
use crate::interaction::gesture::{DragVisual, TimerToken};

/// One effect produced by a controller transition
///
/// `SwapApplied` and `SwapSettled` are distinct on purpose: the first marks
/// the model change, the second the end of the visual move, after which the
/// completion check runs.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Start a one-shot timer; report expiry with the same token
    ScheduleLongPress {
        /// Token to hand back on expiry
        token: TimerToken,
        /// Delay before expiry
        delay: Duration,
    },

    /// Cancel a previously scheduled timer
    CancelLongPress {
        /// Token of the timer to cancel
        token: TimerToken,
    },

    /// The long press elapsed and the floating drag visual is now active
    DragStarted(DragVisual),

    /// Pointer moved while dragging
    DragMoved {
        /// Displacement of the pointer since the drag began
        delta: Vector,
    },

    /// Drag ended without a swap; the source tile returns to its normal look
    DragCancelled {
        /// Slot whose tile was being dragged
        source_slot: usize,
    },

    /// The arrangement changed
    SwapApplied {
        /// Slot the drag started from
        source_slot: usize,
        /// Slot the drag was released over
        target_slot: usize,
    },

    /// A tile should animate to a new grid cell
    TileMoved {
        /// Home index of the moving tile
        tile: usize,
        /// Slot the tile leaves
        from_slot: usize,
        /// Slot the tile arrives at
        to_slot: usize,
        /// Displacement added by this move
        delta: GridOffset,
        /// Running offset of the tile from its rendered home cell
        offset: GridOffset,
    },

    /// The move transitions finished and the drag visual is gone
    SwapSettled {
        /// Slot the drag started from
        source_slot: usize,
        /// Slot the drag was released over
        target_slot: usize,
    },

    /// A tile landed on its home slot
    HapticPulse {
        /// Requested pulse length
        duration: Duration,
    },

    /// Every tile is home; emitted once per controller
    Solved,
}
