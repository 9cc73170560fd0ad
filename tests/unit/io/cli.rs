//! Tests for CLI parsing and batch scrambling

#[cfg(test)]
mod tests {
    use crate::coordinate_image;
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tileswap::PuzzleError;
    use tileswap::io::cli::{Cli, FileProcessor};

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        coordinate_image(16, 16).save(&path).unwrap();
        path
    }

    // Tests default CLI arguments
    // Verified by changing the default rows
    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["tileswap", "photo.png"]);

        assert_eq!(cli.target, PathBuf::from("photo.png"));
        assert_eq!(cli.rows, 4);
        assert_eq!(cli.seed, None);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.verify);
    }

    // Tests short flags map onto the puzzle config
    // Verified by dropping the seed from the config
    #[test]
    fn test_parse_flags_into_config() {
        let cli = Cli::parse_from(["tileswap", "-r", "3", "-s", "99", "-q", "-n", "-v", "dir"]);

        let config = cli.puzzle_config();
        assert_eq!(config.rows, 3);
        assert_eq!(config.seed, Some(99));
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert!(cli.verify);
    }

    // Tests previews are written beside their source
    #[test]
    fn test_output_path_sits_next_to_input() {
        let output = FileProcessor::get_output_path(Path::new("/photos/cat.jpg"));

        assert_eq!(output, PathBuf::from("/photos/cat_scrambled.png"));
    }

    // Tests a directory run scrambles each image once and skips existing previews
    // Verified by processing previews as inputs
    #[test]
    fn test_directory_run_writes_previews_and_skips_outputs() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png");
        write_image(dir.path(), "b.png");
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["tileswap", "-q", "-s", "4", "-v", target.as_str()]);
        let processed = FileProcessor::new(cli).process().unwrap();

        assert_eq!(processed, 2);
        let preview = image::open(dir.path().join("a_scrambled.png")).unwrap();
        assert_eq!((preview.width(), preview.height()), (16, 16));

        // Second run finds every preview already present
        let cli = Cli::parse_from(["tileswap", "-q", target.as_str()]);
        assert_eq!(FileProcessor::new(cli).process().unwrap(), 0);
    }

    // Tests --no-skip rewrites existing previews
    // Verified by ignoring the flag
    #[test]
    fn test_no_skip_regenerates_existing_previews() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "only.png");
        let target = input.to_string_lossy().to_string();

        let first = Cli::parse_from(["tileswap", "-q", target.as_str()]);
        assert_eq!(FileProcessor::new(first).process().unwrap(), 1);

        let again = Cli::parse_from(["tileswap", "-q", "-n", target.as_str()]);
        assert_eq!(FileProcessor::new(again).process().unwrap(), 1);
    }

    // Tests bad rows fail before touching the filesystem
    // Verified by validating after collecting files
    #[test]
    fn test_invalid_rows_rejected_before_reading() {
        let cli = Cli::parse_from(["tileswap", "-q", "-r", "1", "/does/not/exist"]);

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(PuzzleError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests a non-image target file is an error
    // Verified by silently skipping it
    #[test]
    fn test_non_image_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "# hi").unwrap();
        let target = path.to_string_lossy().to_string();

        let cli = Cli::parse_from(["tileswap", "-q", target.as_str()]);

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(PuzzleError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }

    // Tests an image too small for the grid fails the run
    #[test]
    fn test_image_too_small_for_grid_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_image(dir.path(), "tiny.png");
        let target = input.to_string_lossy().to_string();

        let cli = Cli::parse_from(["tileswap", "-q", "-r", "32", target.as_str()]);

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(PuzzleError::ImageTooSmall { rows: 32, .. })
        ));
    }
}
