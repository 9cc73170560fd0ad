//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tileswap::PuzzleError;
    use tileswap::io::error::{check_slot, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::FileSystem {
            path: "/tmp/board.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(PuzzleError::LoaderDisconnected.source().is_none());
    }

    // Tests ImageLoad names the path and the decoder error
    // Verified by omitting the source from the message
    #[test]
    fn test_image_load_error_mentions_path_and_cause() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = PuzzleError::ImageLoad {
            path: PathBuf::from("/photos/cat.jpg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/photos/cat.jpg"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests InvalidSlot formatting
    // Verified by omitting the slot count
    #[test]
    fn test_invalid_slot_message() {
        let error = PuzzleError::InvalidSlot {
            slot: 16,
            slot_count: 16,
        };

        let message = error.to_string();
        assert!(message.contains("16"));
        assert!(message.contains("out of bounds"));
    }

    // Tests GestureConflict names the active phase
    #[test]
    fn test_gesture_conflict_names_active_phase() {
        let error = PuzzleError::GestureConflict { active: "dragging" };

        assert!(error.to_string().contains("dragging"));
    }

    // Tests ImageTooSmall formatting
    // Verified by printing only the width
    #[test]
    fn test_image_too_small_message() {
        let error = PuzzleError::ImageTooSmall {
            width: 3,
            height: 2,
            rows: 4,
        };

        assert_eq!(
            error.to_string(),
            "Image 3x2 is too small for a 4x4 grid"
        );
    }

    // Tests InvalidParameter contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("rows", &1, &"must be at least 2");

        let message = error.to_string();
        assert!(message.contains("rows"));
        assert!(message.contains("'1'"));
        assert!(message.contains("must be at least 2"));
    }

    // Tests slot checks accept the last slot and reject one past it
    // Verified by using an inclusive bound
    #[test]
    fn test_check_slot() {
        assert_eq!(check_slot(3, 4).unwrap(), 3);
        assert!(matches!(
            check_slot(4, 4),
            Err(PuzzleError::InvalidSlot {
                slot: 4,
                slot_count: 4
            })
        ));
    }

    // Tests io errors convert to FileSystem
    #[test]
    fn test_io_error_conversion() {
        let error: PuzzleError = std::io::Error::other("disk on fire").into();

        assert!(matches!(error, PuzzleError::FileSystem { .. }));
        assert!(error.to_string().contains("disk on fire"));
    }
}
