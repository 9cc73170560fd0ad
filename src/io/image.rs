//! Image sources for new puzzles and PNG export of rendered boards

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::io::error::{PuzzleError, Result};

/// Supplier of the decoded picture a puzzle is cut from
///
/// Called once per puzzle start.
pub trait ImageSource {
    /// Decode the picture
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or decoded, or decodes
    /// to zero width or height
    fn decode(&self) -> Result<DynamicImage>;

    /// Short human-readable origin used in logs
    fn describe(&self) -> String;
}

/// Image file on disk, format detected from its contents and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileImage {
    path: PathBuf,
}

impl FileImage {
    /// Reference an image file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileImage {
    fn decode(&self) -> Result<DynamicImage> {
        let image = image::open(&self.path).map_err(|e| PuzzleError::ImageLoad {
            path: self.path.clone(),
            source: e,
        })?;
        ensure_not_empty(image)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Encoded image bytes held in memory (PNG, JPEG, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Wrap encoded bytes
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl ImageSource for EncodedImage {
    fn decode(&self) -> Result<DynamicImage> {
        let image = image::load_from_memory(&self.bytes)?;
        ensure_not_empty(image)
    }

    fn describe(&self) -> String {
        format!("<{} encoded bytes>", self.bytes.len())
    }
}

impl ImageSource for DynamicImage {
    fn decode(&self) -> Result<DynamicImage> {
        ensure_not_empty(self.clone())
    }

    fn describe(&self) -> String {
        let (width, height) = self.dimensions();
        format!("<decoded {width}x{height}>")
    }
}

fn ensure_not_empty(image: DynamicImage) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PuzzleError::EmptyImage { width, height });
    }
    Ok(image)
}

/// Save a rendered board as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
