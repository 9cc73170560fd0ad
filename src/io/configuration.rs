//! Puzzle constants and runtime configuration defaults

use std::time::Duration;

use crate::io::error::{Result, invalid_parameter};

// Grid size bounds
/// Default number of rows (and columns) when no size is selected
pub const DEFAULT_ROWS: usize = 4;
/// Smallest grid that still forms a puzzle
pub const MIN_ROWS: usize = 2;
// Safety limit to prevent excessive tile allocation
/// Largest accepted grid size
pub const MAX_ROWS: usize = 32;

// Gesture timing
/// Hold duration before a press turns into a drag
pub const LONG_PRESS_MS: u64 = 200;
/// Duration of the tile move transition after a swap
pub const DRAGGING_TRANSITION_MS: u64 = 300;
/// Length of the haptic pulse when a tile lands on its home slot
pub const HAPTIC_PULSE_MS: u64 = 50;
/// Upper bound for every configured gesture or feedback duration
pub const MAX_DELAY_MS: u64 = 10_000;

// Drag visual
/// Scale applied to the floating drag visual
pub const DRAG_VISUAL_SCALE: f32 = 1.2;
/// Opacity of the source tile while its drag visual is floating
pub const GHOST_OPACITY: f32 = 0.1;

// Output settings
/// Suffix added to scrambled preview filenames
pub const OUTPUT_SUFFIX: &str = "_scrambled";
/// File extensions accepted as puzzle sources in batch mode
pub const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Settings read once when a puzzle starts
///
/// Changing `rows` after a session has been created has no effect on that
/// session; a new session must be started.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleConfig {
    /// Grid rows (and columns)
    pub rows: usize,
    /// Hold time before a press becomes a drag
    pub long_press: Duration,
    /// Scale of the floating drag visual
    pub drag_scale: f32,
    /// Haptic pulse length for a tile dropped on its home slot
    pub haptic_pulse: Duration,
    /// Length of the tile move animation hosts play after a swap
    pub move_transition: Duration,
    /// Shuffle seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            long_press: Duration::from_millis(LONG_PRESS_MS),
            drag_scale: DRAG_VISUAL_SCALE,
            haptic_pulse: Duration::from_millis(HAPTIC_PULSE_MS),
            move_transition: Duration::from_millis(DRAGGING_TRANSITION_MS),
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Default configuration with a specific grid size
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Builder-style seed override
    #[must_use]
    pub const fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before a board is built
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is outside `[MIN_ROWS, MAX_ROWS]`, the
    /// drag scale is not a positive finite number, or any duration exceeds
    /// [`MAX_DELAY_MS`]
    pub fn validate(&self) -> Result<()> {
        validate_rows(self.rows)?;
        validate_delay("long_press", self.long_press)?;
        validate_delay("haptic_pulse", self.haptic_pulse)?;
        validate_delay("move_transition", self.move_transition)?;
        if !self.drag_scale.is_finite() || self.drag_scale <= 0.0 {
            return Err(invalid_parameter(
                "drag_scale",
                &self.drag_scale,
                &"must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Check a grid size against the supported range
///
/// # Errors
///
/// Returns an error if `rows` is outside `[MIN_ROWS, MAX_ROWS]`
pub fn validate_rows(rows: usize) -> Result<()> {
    if (MIN_ROWS..=MAX_ROWS).contains(&rows) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "rows",
            &rows,
            &format!("must be between {MIN_ROWS} and {MAX_ROWS}"),
        ))
    }
}

fn validate_delay(parameter: &'static str, delay: Duration) -> Result<()> {
    if delay <= Duration::from_millis(MAX_DELAY_MS) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &format!("{}ms", delay.as_millis()),
            &format!("must be at most {MAX_DELAY_MS}ms"),
        ))
    }
}
