//! Pointer coordinates, screen rectangles and grid-cell displacements
//!
//! Screen-space types are input-type agnostic: mouse, touch and pen positions
//! all arrive as a [`Point`] in the same coordinate space as the layout's
//! slot rectangles. Grid-space types count whole cells.

use std::ops::{Add, AddAssign, Sub};

/// Position in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Point at `(x, y)`
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement between two points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    /// Horizontal displacement
    pub dx: f32,
    /// Vertical displacement
    pub dy: f32,
}

impl Vector {
    /// Vector of `(dx, dy)`
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Rectangle with top-left `(x, y)` and the given size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: left and top edges inside, right and bottom outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Top-left corner
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Displacement measured in whole grid cells
///
/// A tile's running visual offset is the sum of the displacements of every
/// swap it took part in over the puzzle's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridOffset {
    /// Columns moved, positive to the right
    pub cols: i32,
    /// Rows moved, positive downwards
    pub rows: i32,
}

impl GridOffset {
    /// Offset of `(cols, rows)` cells
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Offset as a CSS-style translation, in percent of one tile
    pub const fn percent(&self) -> (i32, i32) {
        (self.cols * 100, self.rows * 100)
    }

    /// Offset in layout units for tiles of the given size
    pub fn scaled(&self, tile_width: f32, tile_height: f32) -> Vector {
        Vector::new(self.cols as f32 * tile_width, self.rows as f32 * tile_height)
    }
}

impl Add for GridOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.cols + rhs.cols, self.rows + rhs.rows)
    }
}

impl AddAssign for GridOffset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Grid cells travelled by a tile moving from slot `from` to slot `to`
///
/// `(Δcol, Δrow) = (to mod rows − from mod rows, ⌊to / rows⌋ − ⌊from / rows⌋)`
pub fn grid_delta(from: usize, to: usize, rows: usize) -> GridOffset {
    if rows == 0 {
        return GridOffset::default();
    }
    let col = |slot: usize| (slot % rows) as i32;
    let row = |slot: usize| (slot / rows) as i32;
    GridOffset::new(col(to) - col(from), row(to) - row(from))
}
