//! Progress reporting for long-running harvests
//!
//! Frontends (CLI, tests) implement [`ProgressSink`] to surface status
//! to users. Events are ephemeral; nothing here is persisted.

/// Emitted once per completed page, success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Pages processed so far, including this one
    pub completed_pages: u32,

    /// Total pages in the harvest
    pub total_pages: u32,
}

/// Sink for harvest progress and status notifications
///
/// All methods default to no-ops so implementors only override what
/// they care about.
pub trait ProgressSink {
    /// Free-form status line for human eyes
    fn status(&mut self, _msg: &str) {}

    /// Called once per processed page, after fetch and extraction
    fn page_done(&mut self, _event: ProgressEvent) {}

    /// Called when a page fails to fetch; the harvest continues
    fn page_error(&mut self, _page: u32, _reason: &str) {}
}

/// A no-op progress sink
pub struct NullProgress;
impl ProgressSink for NullProgress {}

/// Progress sink that forwards everything to `tracing`
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn status(&mut self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn page_done(&mut self, event: ProgressEvent) {
        tracing::info!(
            "Progress: {}/{} pages",
            event.completed_pages,
            event.total_pages
        );
    }

    fn page_error(&mut self, page: u32, reason: &str) {
        tracing::warn!("Page {} failed: {}", page, reason);
    }
}
