//! Puzzle sessions and their boundary with the host application
//!
//! This module contains the host-facing side of the puzzle:
//! - Collaborator traits for layout, timers, haptics, banner and view
//! - Input-agnostic pointer events
//! - The session that owns a board and its controller
//! - Background board loading

/// Host collaborator interfaces and reference implementations
pub mod collaborators;
/// Background board construction
pub mod loader;
/// Input-agnostic pointer events
pub mod pointer;
/// Session owning one board and its drag controller
pub mod puzzle;

pub use collaborators::{
    Collaborators, DeadlineScheduler, Haptics, Layout, NoFeedback, PuzzleView, Scheduler,
    UniformGridLayout, WinBanner,
};
pub use loader::BoardLoader;
pub use pointer::{PointerAction, PointerEvent, PointerKind};
pub use puzzle::PuzzleSession;
