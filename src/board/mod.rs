//! Board state for one puzzle
//!
//! This module contains the model side of the puzzle:
//! - The slot-to-tile permutation and its mutations
//! - Image slicing into per-tile sub-images
//! - The board model tying both together

/// Permutation of tiles over slots
pub mod arrangement;
/// Board model owning the arrangement and tile images
pub mod model;
/// Source image slicing and board rendering
pub mod slicing;

pub use arrangement::{Arrangement, Transposition};
pub use model::BoardModel;
pub use slicing::TileSet;
