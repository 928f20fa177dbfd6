// src/progress.rs
/// Lightweight progress reporting for long-running operations (scrape).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of clubs to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One club fetched and parsed.
    fn item_done(&mut self, _club: &str, _slots: usize) {}

    /// One club could not be fetched; the run continues.
    fn item_failed(&mut self, _club: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
