//! Long-press drag state machine driving tile swaps
//!
//! ```text
//! IDLE --press--> PRESSED --timer--> DRAGGING --release--> SETTLING --settled--> IDLE
//!                    |                   |
//!                    +--release--> IDLE  +--release (no target)--> IDLE
//! ```
//!
//! The controller never touches the screen. It consumes slot indices, pointer
//! positions and slot rectangles resolved by the layout, and returns the
//! [`InteractionEvent`]s the host must act on. Only [`DragController::release`]
//! mutates the board, and a new press is rejected until the previous swap has
//! settled, so there is never more than one mutation in flight.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::board::BoardModel;
use crate::interaction::events::InteractionEvent;
use crate::interaction::geometry::{GridOffset, Point, Rect, Vector, grid_delta};
use crate::interaction::gesture::{DragVisual, GestureSession, TimerToken};
use crate::io::configuration::{GHOST_OPACITY, PuzzleConfig};
use crate::io::error::{PuzzleError, Result, check_slot};

/// Where the controller is in the gesture cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// No gesture; presses are accepted
    Idle,
    /// Press held, waiting for the long-press delay
    Pressed(GestureSession),
    /// Long press elapsed, floating visual follows the pointer
    Dragging {
        /// Gesture being tracked
        gesture: GestureSession,
        /// Floating visual shown to the user
        visual: DragVisual,
    },
    /// Swap applied, waiting for the move transitions to finish
    Settling {
        /// Slot the drag started from
        source_slot: usize,
        /// Slot the drag was released over
        target_slot: usize,
    },
}

impl DragPhase {
    /// Lower-case phase name for logs and errors
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pressed(_) => "pressed",
            Self::Dragging { .. } => "dragging",
            Self::Settling { .. } => "settling",
        }
    }
}

/// Turns press, hold, move and release into at most one swap per gesture
#[derive(Debug, Clone)]
pub struct DragController {
    rows: usize,
    slot_count: usize,
    long_press: Duration,
    drag_scale: f32,
    haptic_pulse: Duration,
    move_transition: Duration,
    phase: DragPhase,
    last_token: TimerToken,
    offsets: Vec<GridOffset>,
    solved_announced: bool,
}

impl DragController {
    /// Controller for `board`, with timings from `config`
    ///
    /// The grid size is taken from the board, not from `config.rows`.
    pub fn new(board: &BoardModel, config: &PuzzleConfig) -> Self {
        let slot_count = board.slot_count();
        Self {
            rows: board.rows(),
            slot_count,
            long_press: config.long_press,
            drag_scale: config.drag_scale,
            haptic_pulse: config.haptic_pulse,
            move_transition: config.move_transition,
            phase: DragPhase::Idle,
            last_token: TimerToken::new(0),
            offsets: vec![GridOffset::default(); slot_count],
            solved_announced: false,
        }
    }

    /// Current phase
    pub const fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Whether a press would be accepted
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    /// Gesture being tracked, if any
    pub const fn gesture(&self) -> Option<&GestureSession> {
        match &self.phase {
            DragPhase::Pressed(gesture) | DragPhase::Dragging { gesture, .. } => Some(gesture),
            DragPhase::Idle | DragPhase::Settling { .. } => None,
        }
    }

    /// Floating drag visual, present only while dragging
    pub const fn drag_visual(&self) -> Option<&DragVisual> {
        match &self.phase {
            DragPhase::Dragging { visual, .. } => Some(visual),
            _ => None,
        }
    }

    /// Running visual offset of a tile, by home index
    pub fn tile_offset(&self, tile: usize) -> Option<GridOffset> {
        self.offsets.get(tile).copied()
    }

    /// How long hosts should animate each `TileMoved` before reporting
    /// [`DragController::transition_settled`]
    pub const fn move_transition(&self) -> Duration {
        self.move_transition
    }

    /// Whether the solved notification has already been emitted
    pub const fn solved_announced(&self) -> bool {
        self.solved_announced
    }

    /// Begin a gesture on `slot`
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GestureConflict`] if a gesture or an unsettled
    /// swap is active (the press is ignored and the active gesture is left
    /// intact), or [`PuzzleError::InvalidSlot`] if `slot` is out of range
    pub fn press(&mut self, slot: usize, point: Point) -> Result<Vec<InteractionEvent>> {
        if !self.is_idle() {
            warn!(slot, active = self.phase.name(), "Press rejected");
            return Err(PuzzleError::GestureConflict {
                active: self.phase.name(),
            });
        }
        check_slot(slot, self.slot_count)?;

        let token = self.last_token.next();
        self.last_token = token;
        self.phase = DragPhase::Pressed(GestureSession::press(slot, point, token));
        debug!(slot, timer = token.id(), "Press started");

        Ok(vec![InteractionEvent::ScheduleLongPress {
            token,
            delay: self.long_press,
        }])
    }

    /// Track the pointer; emits the drag displacement while dragging
    pub fn pointer_moved(&mut self, point: Point) -> Vec<InteractionEvent> {
        match &mut self.phase {
            DragPhase::Pressed(gesture) => {
                gesture.track(point);
                Vec::new()
            }
            DragPhase::Dragging { gesture, visual } => {
                gesture.track(point);
                let delta = gesture.displacement();
                visual.offset = delta;
                vec![InteractionEvent::DragMoved { delta }]
            }
            DragPhase::Idle | DragPhase::Settling { .. } => Vec::new(),
        }
    }

    /// Long-press timer expired
    ///
    /// `origin` is the rendered rectangle of the pressed slot, where the
    /// floating visual appears. Tokens other than the pending press's are
    /// ignored.
    pub fn long_press_elapsed(&mut self, token: TimerToken, origin: Rect) -> Vec<InteractionEvent> {
        let DragPhase::Pressed(mut gesture) = self.phase else {
            debug!(timer = token.id(), phase = self.phase.name(), "Ignoring stale long-press timer");
            return Vec::new();
        };
        if gesture.timer != token {
            debug!(timer = token.id(), "Ignoring stale long-press timer");
            return Vec::new();
        }

        gesture.begin_drag();
        let visual = DragVisual {
            source_slot: gesture.source_slot,
            origin,
            scale: self.drag_scale,
            offset: Vector::default(),
            ghost_opacity: GHOST_OPACITY,
        };
        self.phase = DragPhase::Dragging { gesture, visual };
        debug!(slot = gesture.source_slot, "Drag started");

        vec![InteractionEvent::DragStarted(visual)]
    }

    /// Pointer released at `point`, over `target_slot` if the layout found one
    ///
    /// A release before the long press elapsed cancels the timer and never
    /// swaps. A drag released outside the board, or over its own slot, is
    /// cancelled. Otherwise the tiles are swapped and the controller waits
    /// for [`DragController::transition_settled`].
    ///
    /// # Errors
    ///
    /// Propagates a swap failure from the board; the controller returns to
    /// idle and the board is unchanged in that case
    #[instrument(skip(self, board), fields(phase = self.phase.name()))]
    pub fn release(
        &mut self,
        point: Point,
        target_slot: Option<usize>,
        board: &mut BoardModel,
    ) -> Result<Vec<InteractionEvent>> {
        match self.phase {
            DragPhase::Idle | DragPhase::Settling { .. } => Ok(Vec::new()),
            DragPhase::Pressed(gesture) => {
                self.phase = DragPhase::Idle;
                debug!(slot = gesture.source_slot, "Released before long press");
                Ok(vec![InteractionEvent::CancelLongPress {
                    token: gesture.timer,
                }])
            }
            DragPhase::Dragging { mut gesture, .. } => {
                gesture.track(point);
                self.phase = DragPhase::Idle;
                let source_slot = gesture.source_slot;

                let Some(target_slot) =
                    target_slot.filter(|&slot| slot < self.slot_count && slot != source_slot)
                else {
                    debug!(source_slot, "Drag cancelled");
                    return Ok(vec![InteractionEvent::DragCancelled { source_slot }]);
                };

                board.swap(source_slot, target_slot)?;
                self.phase = DragPhase::Settling {
                    source_slot,
                    target_slot,
                };
                info!(source_slot, target_slot, "Swap applied");

                let mut events = vec![InteractionEvent::SwapApplied {
                    source_slot,
                    target_slot,
                }];
                // After the swap the dragged tile sits in the target slot
                for (from_slot, to_slot) in [(source_slot, target_slot), (target_slot, source_slot)] {
                    let tile = board.tile_home_index(to_slot)?;
                    events.push(self.move_tile(tile, from_slot, to_slot));
                }
                Ok(events)
            }
        }
    }

    /// The move transitions of the last swap finished
    ///
    /// Emits `SwapSettled`, then a haptic pulse if either moved tile is now
    /// home, then `Solved` the first time the board is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the board no longer matches the controller's grid
    pub fn transition_settled(&mut self, board: &BoardModel) -> Result<Vec<InteractionEvent>> {
        let DragPhase::Settling {
            source_slot,
            target_slot,
        } = self.phase
        else {
            return Ok(Vec::new());
        };
        self.phase = DragPhase::Idle;

        let mut events = vec![InteractionEvent::SwapSettled {
            source_slot,
            target_slot,
        }];

        let mut landed_home = false;
        for slot in [source_slot, target_slot] {
            landed_home |= board.tile_home_index(slot)? == slot;
        }
        if landed_home {
            events.push(InteractionEvent::HapticPulse {
                duration: self.haptic_pulse,
            });
        }

        if !self.solved_announced && board.is_solved() {
            self.solved_announced = true;
            info!(rows = self.rows, "Puzzle solved");
            events.push(InteractionEvent::Solved);
        }

        Ok(events)
    }

    /// Abandon any gesture, cancelling a pending long-press timer
    pub fn reset(&mut self) -> Vec<InteractionEvent> {
        let events = match self.phase {
            DragPhase::Pressed(gesture) => vec![InteractionEvent::CancelLongPress {
                token: gesture.timer,
            }],
            DragPhase::Dragging { gesture, .. } => vec![InteractionEvent::DragCancelled {
                source_slot: gesture.source_slot,
            }],
            DragPhase::Idle | DragPhase::Settling { .. } => Vec::new(),
        };
        self.phase = DragPhase::Idle;
        events
    }

    fn move_tile(&mut self, tile: usize, from_slot: usize, to_slot: usize) -> InteractionEvent {
        let delta = grid_delta(from_slot, to_slot, self.rows);
        let offset = self.offsets.get_mut(tile).map_or(delta, |offset| {
            *offset += delta;
            *offset
        });
        InteractionEvent::TileMoved {
            tile,
            from_slot,
            to_slot,
            delta,
            offset,
        }
    }
}
