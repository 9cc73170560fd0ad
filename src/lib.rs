//! Image tile-swap puzzle core
//!
//! A picture is cut into an N×N grid of tiles and shuffled. The player
//! long-presses a tile, drags it over another and releases to swap the two,
//! until every tile is back on its home slot. This crate holds the board
//! model, the long-press drag state machine and the session that wires both
//! to a host's layout, timers and feedback.

#![forbid(unsafe_code)]

/// Tile arrangement, image slicing and the board model
pub mod board;
/// Long-press drag controller and its geometry and events
pub mod interaction;
/// Input/output operations, configuration and error handling
pub mod io;
/// Puzzle sessions, pointer events and host collaborators
pub mod session;

pub use board::BoardModel;
pub use interaction::{DragController, InteractionEvent};
pub use io::configuration::PuzzleConfig;
pub use io::error::{PuzzleError, Result};
pub use session::PuzzleSession;
