//! User-facing progress output.

/// Port for run progress messages.
pub trait Reporter {
    fn step(&self, number: usize, message: &str);
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Unstyled line, used for summaries.
    fn line(&self, message: &str);
}
