//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tileswap::io::progress::ProgressManager;

    // Tests the bar advances once per finished file
    // Verified by advancing on start_file
    #[test]
    fn test_progress_advances_per_completed_file() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        manager.start_file(Path::new("photos/one.png"));
        manager.complete_file();
        manager.start_file(Path::new("photos/two.png"));
        manager.complete_file();

        assert_eq!(manager.position(), 2);
        manager.finish();
    }

    // Tests a fresh manager has made no progress
    #[test]
    fn test_default_manager_starts_at_zero() {
        let manager = ProgressManager::default();

        assert_eq!(manager.position(), 0);
    }
}
