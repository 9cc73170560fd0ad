//! Command-line interface for batch scramble previews

use crate::board::BoardModel;
use crate::io::configuration::{
    DEFAULT_ROWS, OUTPUT_SUFFIX, PuzzleConfig, SOURCE_EXTENSIONS, validate_rows,
};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::{FileImage, export_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "tileswap")]
#[command(
    author,
    version,
    about = "Cut images into shuffled tile puzzles and export the scrambled board"
)]
/// Command-line arguments for the scramble preview tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid rows (and columns)
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Random seed for a reproducible shuffle
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Replay the inverse shuffle and check the board reports solved
    #[arg(short, long)]
    pub verify: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Puzzle configuration for every processed image
    pub fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig {
            seed: self.seed,
            ..PuzzleConfig::with_rows(self.rows)
        }
    }
}

/// Scrambles each target image and writes the preview next to it
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the number of images scrambled.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is invalid, the target cannot be
    /// read, an image cannot be decoded or exported, or verification fails
    pub fn process(&mut self) -> Result<usize> {
        validate_rows(self.cli.rows)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!(target = %self.cli.target.display(), "Nothing to process");
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_source_image(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG or JPEG image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| PuzzleError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_source_image(&path) && !is_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let config = self.cli.puzzle_config();
        let mut board = BoardModel::initialize(&FileImage::new(input_path), &config)?;

        let output_path = Self::get_output_path(input_path);
        export_png(&board.render()?, &output_path)?;
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            misplaced = board.arrangement().misplaced(),
            "Scrambled board exported"
        );

        if self.cli.verify {
            verify_unshuffle(&mut board, input_path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Location of the scrambled preview for an input image
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

// Undo the shuffle swap by swap; the board must end solved
fn verify_unshuffle(board: &mut BoardModel, input_path: &Path) -> Result<()> {
    let inverse: Vec<_> = board.unshuffle_sequence().collect();
    for (slot_a, slot_b) in inverse {
        board.swap(slot_a, slot_b)?;
    }
    if board.is_solved() {
        info!(input = %input_path.display(), "Inverse shuffle restores the picture");
        Ok(())
    } else {
        Err(PuzzleError::InvalidArrangement {
            reason: format!(
                "inverse shuffle left {} tiles misplaced for '{}'",
                board.arrangement().misplaced(),
                input_path.display()
            ),
        })
    }
}

fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
