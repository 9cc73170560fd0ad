//! Board model: tile pixels plus the live arrangement for one puzzle

use image::{DynamicImage, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, instrument};

use crate::board::arrangement::{Arrangement, Transposition};
use crate::board::slicing::TileSet;
use crate::io::configuration::{PuzzleConfig, validate_rows};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::ImageSource;

/// Arrangement, tile images and shuffle history of one puzzle
///
/// The arrangement is only ever changed through [`BoardModel::swap`]. Within
/// a [`crate::session::PuzzleSession`] the drag controller's release handler
/// is the sole caller, so at most one mutation is in flight at a time.
#[derive(Debug, Clone)]
pub struct BoardModel {
    arrangement: Arrangement,
    tiles: Option<TileSet>,
    shuffle_log: Vec<Transposition>,
}

impl BoardModel {
    /// Decode a source image, slice it and shuffle the tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the image cannot be
    /// decoded, or it is empty or too small for the grid. No board is built
    /// in any of these cases.
    #[instrument(skip(source, config), fields(rows = config.rows, source = %source.describe()))]
    pub fn initialize<S: ImageSource + ?Sized>(source: &S, config: &PuzzleConfig) -> Result<Self> {
        config.validate()?;
        let image = source.decode()?;
        Self::from_image(&image, config)
    }

    /// Slice and shuffle an already-decoded image
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the image is empty
    /// or too small for the grid
    pub fn from_image(image: &DynamicImage, config: &PuzzleConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::shuffled(image, config.rows, &mut rng)
    }

    /// Slice an image and shuffle with a caller-supplied random source
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is out of range or the image is empty or
    /// too small for the grid
    pub fn shuffled<R: Rng + ?Sized>(
        image: &DynamicImage,
        rows: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let tiles = TileSet::slice(image, rows)?;
        let mut arrangement = Arrangement::identity(rows);
        let shuffle_log = arrangement.shuffle(rng);

        let (tile_width, tile_height) = tiles.tile_size();
        info!(
            rows,
            tile_width,
            tile_height,
            misplaced = arrangement.misplaced(),
            "Board initialized"
        );

        Ok(Self {
            arrangement,
            tiles: Some(tiles),
            shuffle_log,
        })
    }

    /// Board with a fixed arrangement and no tile images
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is out of range or `tiles` is not a
    /// permutation of `[0, rows²)`
    pub fn from_arrangement(rows: usize, tiles: Vec<usize>) -> Result<Self> {
        validate_rows(rows)?;
        Ok(Self {
            arrangement: Arrangement::from_tiles(rows, tiles)?,
            tiles: None,
            shuffle_log: Vec::new(),
        })
    }

    /// Exchange the tiles in two slots; a no-op when the slots are equal
    ///
    /// # Errors
    ///
    /// Returns an error if either slot is out of range; the board is left
    /// unchanged in that case
    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> Result<()> {
        self.arrangement.swap(slot_a, slot_b)?;
        debug!(slot_a, slot_b, "Swapped tiles");
        Ok(())
    }

    /// Whether every tile sits on its home slot
    pub fn is_solved(&self) -> bool {
        self.arrangement.is_solved()
    }

    /// Home identity of the tile currently in `slot`
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is out of range
    pub fn tile_home_index(&self, slot: usize) -> Result<usize> {
        self.arrangement.home_index(slot)
    }

    /// Grid rows (and columns)
    pub const fn rows(&self) -> usize {
        self.arrangement.rows()
    }

    /// Number of slots on the board
    pub fn slot_count(&self) -> usize {
        self.arrangement.len()
    }

    /// Current arrangement
    pub const fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Tile images, when the board was built from a picture
    pub const fn tiles(&self) -> Option<&TileSet> {
        self.tiles.as_ref()
    }

    /// Transpositions applied by the initial shuffle, in application order
    pub fn shuffle_log(&self) -> &[Transposition] {
        &self.shuffle_log
    }

    /// Swaps that undo the initial shuffle when applied in order
    pub fn unshuffle_sequence(&self) -> impl Iterator<Item = Transposition> + '_ {
        self.shuffle_log.iter().rev().copied()
    }

    /// Render the current arrangement as a single image
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no tile images
    pub fn render(&self) -> Result<RgbaImage> {
        let tiles = self.tiles.as_ref().ok_or_else(|| {
            invalid_parameter("tiles", &"none", &"board was built without a source image")
        })?;
        tiles.compose(&self.arrangement)
    }
}
