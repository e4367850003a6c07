/// Trait for reporting comparison progress.
///
/// CLI implements with indicatif. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_discover_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_compare_start(&self, _total_visits: u64) {}
    /// Called once per ordered pair visited, self pairs and skipped pairs included.
    fn on_compare_progress(&self, _visited: u64, _total_visits: u64) {}
    fn on_compare_complete(&self, _scored_pairs: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

/// Percentage of ordered pairs visited. An empty run counts as complete.
pub fn percent_complete(visited: u64, total_visits: u64) -> f64 {
    if total_visits == 0 {
        return 100.0;
    }
    visited as f64 / total_visits as f64 * 100.0
}
