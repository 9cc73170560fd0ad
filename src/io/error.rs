//! Error types for board construction, slot access and gesture handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to open or decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Encoded image bytes could not be decoded
    ImageDecode {
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Decoded image has no pixels along at least one axis
    EmptyImage {
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
    },

    /// Image is too small to cut into the requested grid
    ///
    /// Occurs when `width / rows` or `height / rows` rounds down to zero.
    ImageTooSmall {
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
        /// Requested rows (and columns)
        rows: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Slot index outside `[0, rows²)`
    ///
    /// The offending operation is rejected and the arrangement is left untouched.
    InvalidSlot {
        /// The invalid slot index
        slot: usize,
        /// Number of slots on the board
        slot_count: usize,
    },

    /// Supplied tile order is not a permutation of the home indices
    InvalidArrangement {
        /// Description of what is wrong with the order
        reason: String,
    },

    /// A press arrived while another gesture or an unsettled swap is active
    GestureConflict {
        /// Phase the controller was in when the press was rejected
        active: &'static str,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Background board loader stopped without delivering a result
    LoaderDisconnected,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageDecode { source } => {
                write!(f, "Failed to decode image: {source}")
            }
            Self::EmptyImage { width, height } => {
                write!(f, "Image is empty ({width}x{height})")
            }
            Self::ImageTooSmall {
                width,
                height,
                rows,
            } => {
                write!(
                    f,
                    "Image {width}x{height} is too small for a {rows}x{rows} grid"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSlot { slot, slot_count } => {
                write!(f, "Slot {slot} is out of bounds (board has {slot_count} slots)")
            }
            Self::InvalidArrangement { reason } => {
                write!(f, "Invalid arrangement: {reason}")
            }
            Self::GestureConflict { active } => {
                write!(f, "Press rejected: a gesture is already {active}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::LoaderDisconnected => {
                write!(f, "Board loader finished without producing a board")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::ImageDecode { source }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageDecode { source: err }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a slot index against the board size
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidSlot`] if `slot >= slot_count`
pub const fn check_slot(slot: usize, slot_count: usize) -> Result<usize> {
    if slot < slot_count {
        Ok(slot)
    } else {
        Err(PuzzleError::InvalidSlot { slot, slot_count })
    }
}
