//! Drag interaction: long-press gesture handling for tile swaps
//!
//! This module contains the gesture side of the puzzle:
//! - Input-agnostic geometry and grid displacements
//! - Gesture session state and timer tokens
//! - The events the controller emits
//! - The drag controller state machine

/// Drag controller state machine
pub mod controller;
/// Effects emitted by the controller
pub mod events;
/// Points, rectangles and grid offsets
pub mod geometry;
/// Per-gesture transient state
pub mod gesture;

pub use controller::{DragController, DragPhase};
pub use events::InteractionEvent;
pub use geometry::{GridOffset, Point, Rect, Vector, grid_delta};
pub use gesture::{DragVisual, GestureSession, TimerToken};
