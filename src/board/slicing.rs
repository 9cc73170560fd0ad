//! Cuts a source image into per-tile sub-images and reassembles boards

use image::{DynamicImage, GenericImageView, RgbaImage, imageops};

use crate::board::arrangement::Arrangement;
use crate::io::configuration::validate_rows;
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Sub-images of a source picture, indexed by home index
///
/// Tile `i` is the crop at grid cell `(i mod rows, ⌊i / rows⌋)`. When the image
/// size is not a multiple of `rows` the remainder along the right and bottom
/// edges is discarded.
#[derive(Debug, Clone)]
pub struct TileSet {
    rows: usize,
    tile_width: u32,
    tile_height: u32,
    tiles: Vec<RgbaImage>,
}

impl TileSet {
    /// Slice a decoded image into `rows²` equally sized tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` is outside the supported range
    /// - The image has zero width or height
    /// - The image is narrower or shorter than `rows` pixels
    pub fn slice(image: &DynamicImage, rows: usize) -> Result<Self> {
        validate_rows(rows)?;

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyImage { width, height });
        }

        let rows_px = u32::try_from(rows).map_err(|err| invalid_parameter("rows", &rows, &err))?;
        let tile_width = width / rows_px;
        let tile_height = height / rows_px;
        if tile_width == 0 || tile_height == 0 {
            return Err(PuzzleError::ImageTooSmall {
                width,
                height,
                rows,
            });
        }

        let rgba = image.to_rgba8();
        let tiles = (0..rows * rows)
            .map(|home| {
                let (col, row) = cell_of(home, rows);
                imageops::crop_imm(
                    &rgba,
                    col * tile_width,
                    row * tile_height,
                    tile_width,
                    tile_height,
                )
                .to_image()
            })
            .collect();

        Ok(Self {
            rows,
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Render the board as it currently looks
    ///
    /// # Errors
    ///
    /// Returns an error if the arrangement was built for a different grid size
    pub fn compose(&self, arrangement: &Arrangement) -> Result<RgbaImage> {
        if arrangement.rows() != self.rows {
            return Err(PuzzleError::InvalidArrangement {
                reason: format!(
                    "arrangement has {} rows but tiles were cut for {}",
                    arrangement.rows(),
                    self.rows
                ),
            });
        }

        let side = self.rows as u32;
        let mut canvas = RgbaImage::new(self.tile_width * side, self.tile_height * side);
        for (slot, &home) in arrangement.tiles().iter().enumerate() {
            let Some(tile) = self.tiles.get(home) else {
                return Err(PuzzleError::InvalidSlot {
                    slot: home,
                    slot_count: self.tiles.len(),
                });
            };
            let (col, row) = cell_of(slot, self.rows);
            imageops::replace(
                &mut canvas,
                tile,
                i64::from(col * self.tile_width),
                i64::from(row * self.tile_height),
            );
        }
        Ok(canvas)
    }

    /// Pixels of the tile whose home is `home`
    pub fn tile(&self, home: usize) -> Option<&RgbaImage> {
        self.tiles.get(home)
    }

    /// Tile width and height in pixels
    pub const fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Grid rows (and columns)
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tiles were cut
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// Column and row of a slot in pixel-space units
const fn cell_of(index: usize, rows: usize) -> (u32, u32) {
    ((index % rows) as u32, (index / rows) as u32)
}
