//! One active puzzle: board, drag controller and host collaborators

use tracing::{debug, info, instrument};

use crate::board::BoardModel;
use crate::interaction::controller::DragController;
use crate::interaction::events::InteractionEvent;
use crate::interaction::geometry::Rect;
use crate::interaction::gesture::TimerToken;
use crate::io::configuration::PuzzleConfig;
use crate::io::error::Result;
use crate::io::image::ImageSource;
use crate::session::collaborators::Collaborators;
use crate::session::pointer::{PointerAction, PointerEvent};

/// Owned state of one puzzle view
///
/// Each session is independent; several may run side by side. Dropping the
/// session cancels any pending long-press timer.
pub struct PuzzleSession {
    board: BoardModel,
    controller: DragController,
    hosts: Collaborators,
    ended: bool,
}

impl PuzzleSession {
    /// Session over an existing board
    pub fn new(board: BoardModel, config: &PuzzleConfig, hosts: Collaborators) -> Self {
        let controller = DragController::new(&board, config);
        info!(rows = board.rows(), "Puzzle session started");
        Self {
            board,
            controller,
            hosts,
            ended: false,
        }
    }

    /// Decode, slice and shuffle a picture, then start a session on it
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built; no session exists then
    pub fn start<S: ImageSource + ?Sized>(
        source: &S,
        config: &PuzzleConfig,
        hosts: Collaborators,
    ) -> Result<Self> {
        let board = BoardModel::initialize(source, config)?;
        Ok(Self::new(board, config, hosts))
    }

    /// Board being played
    pub const fn board(&self) -> &BoardModel {
        &self.board
    }

    /// Drag controller state
    pub const fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Route one pointer event
    ///
    /// Presses outside every slot are ignored. Returns the events that were
    /// dispatched to the collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuzzleError::GestureConflict`] for a press while a
    /// gesture or an unsettled swap is active; the active gesture continues
    /// unaffected
    #[instrument(skip(self), fields(action = ?event.action, kind = ?event.kind))]
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<Vec<InteractionEvent>> {
        let rows = self.board.rows();
        let events = match event.action {
            PointerAction::Down => {
                let Some(slot) = self.hosts.layout.slot_at(event.position, rows) else {
                    debug!("Press outside the board");
                    return Ok(Vec::new());
                };
                self.controller.press(slot, event.position)?
            }
            PointerAction::Move => self.controller.pointer_moved(event.position),
            PointerAction::Up => {
                let target = self.hosts.layout.slot_at(event.position, rows);
                self.controller
                    .release(event.position, target, &mut self.board)?
            }
        };
        self.dispatch(&events);
        Ok(events)
    }

    /// Report expiry of a long-press timer scheduled by this session
    pub fn long_press_elapsed(&mut self, token: TimerToken) -> Vec<InteractionEvent> {
        let origin = self
            .controller
            .gesture()
            .map_or_else(Rect::default, |gesture| {
                self.hosts
                    .layout
                    .slot_rect(gesture.source_slot, self.board.rows())
            });
        let events = self.controller.long_press_elapsed(token, origin);
        self.dispatch(&events);
        events
    }

    /// Report that the tile move transitions of the last swap finished
    ///
    /// # Errors
    ///
    /// Returns an error if the completion check cannot read the board
    pub fn transition_settled(&mut self) -> Result<Vec<InteractionEvent>> {
        let events = self.controller.transition_settled(&self.board)?;
        self.dispatch(&events);
        Ok(events)
    }

    /// Tear the session down, cancelling any gesture in progress
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        let events = self.controller.reset();
        self.dispatch(&events);
        debug!("Puzzle session ended");
    }

    fn dispatch(&mut self, events: &[InteractionEvent]) {
        let hosts = &mut self.hosts;
        for event in events {
            match event {
                InteractionEvent::ScheduleLongPress { token, delay } => {
                    hosts.scheduler.schedule(*token, *delay);
                }
                InteractionEvent::CancelLongPress { token } => hosts.scheduler.cancel(*token),
                InteractionEvent::DragStarted(visual) => hosts.view.drag_started(visual),
                InteractionEvent::DragMoved { delta } => hosts.view.drag_moved(*delta),
                InteractionEvent::DragCancelled { source_slot }
                | InteractionEvent::SwapSettled { source_slot, .. } => {
                    hosts.view.drag_ended(*source_slot);
                }
                InteractionEvent::TileMoved { tile, offset, .. } => {
                    hosts.view.tile_moved(*tile, *offset);
                }
                InteractionEvent::HapticPulse { duration } => hosts.haptics.pulse(*duration),
                InteractionEvent::Solved => hosts.banner.show(),
                InteractionEvent::SwapApplied { .. } => {}
            }
        }
    }
}

impl Drop for PuzzleSession {
    fn drop(&mut self) {
        self.end();
    }
}
