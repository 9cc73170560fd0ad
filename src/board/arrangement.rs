//! Slot-to-tile permutation with shuffling, swapping and completion checks
//!
//! A tile's identity is its home index: the slot it occupies when the puzzle
//! is solved. The arrangement stores, for every slot, the home index of the
//! tile currently sitting there. Every mutation is a single transposition, so
//! the sequence is a permutation of `[0, rows²)` at all times.

use std::fmt::{self, Display, Formatter};

use rand::Rng;

use crate::io::error::{PuzzleError, Result, check_slot};

/// A pair of slots exchanged by one swap
pub type Transposition = (usize, usize);

/// Current placement of every tile on an N×N board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    rows: usize,
    tiles: Vec<usize>,
}

impl Arrangement {
    /// Solved arrangement: every slot holds the tile that belongs there
    pub fn identity(rows: usize) -> Self {
        Self {
            rows,
            tiles: (0..rows * rows).collect(),
        }
    }

    /// Build an arrangement from an explicit slot-to-tile order
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not hold exactly `rows²` entries or
    /// is not a permutation of `[0, rows²)`
    pub fn from_tiles(rows: usize, tiles: Vec<usize>) -> Result<Self> {
        let slot_count = rows * rows;
        if tiles.len() != slot_count {
            return Err(PuzzleError::InvalidArrangement {
                reason: format!("expected {slot_count} tiles, got {}", tiles.len()),
            });
        }

        let mut seen = vec![false; slot_count];
        for &tile in &tiles {
            match seen.get_mut(tile) {
                Some(flag) if !*flag => *flag = true,
                Some(_) => {
                    return Err(PuzzleError::InvalidArrangement {
                        reason: format!("tile {tile} appears more than once"),
                    });
                }
                None => {
                    return Err(PuzzleError::InvalidArrangement {
                        reason: format!("tile {tile} is outside [0, {slot_count})"),
                    });
                }
            }
        }

        Ok(Self { rows, tiles })
    }

    /// Uniform Fisher–Yates shuffle, walking from the last slot down to 1
    ///
    /// Each step draws `u` from `[0, 1)` and exchanges slot `i` with slot
    /// `⌊u·(i+1)⌋`. Returns the transpositions in the order they were applied;
    /// replaying them in reverse restores the previous arrangement.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Transposition> {
        let mut applied = Vec::with_capacity(self.tiles.len().saturating_sub(1));
        for i in (1..self.tiles.len()).rev() {
            let u = rng.random::<f64>();
            // Guards against u·(i+1) rounding up to i+1
            let j = ((u * (i + 1) as f64) as usize).min(i);
            self.tiles.swap(i, j);
            applied.push((i, j));
        }
        applied
    }

    /// Exchange the tiles occupying two slots
    ///
    /// Swapping a slot with itself does nothing. Does not check for completion.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidSlot`] if either slot is out of range; the
    /// arrangement is unchanged in that case
    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> Result<()> {
        let slot_count = self.tiles.len();
        check_slot(slot_a, slot_count)?;
        check_slot(slot_b, slot_count)?;
        if slot_a != slot_b {
            self.tiles.swap(slot_a, slot_b);
        }
        Ok(())
    }

    /// Whether every slot holds its own home tile
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(slot, &tile)| slot == tile)
    }

    /// Home index of the tile currently in `slot`
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidSlot`] if the slot is out of range
    pub fn home_index(&self, slot: usize) -> Result<usize> {
        self.tiles
            .get(slot)
            .copied()
            .ok_or(PuzzleError::InvalidSlot {
                slot,
                slot_count: self.tiles.len(),
            })
    }

    /// Slot currently holding the tile whose home is `home`
    pub fn slot_of(&self, home: usize) -> Option<usize> {
        self.tiles.iter().position(|&tile| tile == home)
    }

    /// Number of tiles not sitting on their home slot
    pub fn misplaced(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(slot, &tile)| slot != tile)
            .count()
    }

    /// Grid rows (and columns)
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slots on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no slots
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Slot-ordered home indices
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }
}

impl Display for Arrangement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.tiles.len().saturating_sub(1).to_string().len();
        for row in self.tiles.chunks(self.rows.max(1)) {
            for tile in row {
                write!(f, "{tile:>width$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
