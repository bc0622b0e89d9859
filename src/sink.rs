//! Presentation seam between the aggregator and the embedding UI.
//!
//! The aggregator never renders anything itself — it reports every
//! observable event through a [`SearchSink`]. An embedding application
//! implements the trait over its own widgets (progress spinner, result
//! grid, toast system); tests implement it with a recording sink.

use crate::types::VideoItem;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// Callbacks through which one aggregation run reports to the UI.
///
/// Methods take `&self`; implementations that accumulate state use
/// interior mutability. All methods are fire-and-forget and must not
/// block — the run loop calls them between lookup completions.
///
/// # Event ordering contract
///
/// For a run over `n` providers the sink observes, in order:
///
/// 1. `progress(0, n)` once, before any lookup resolves
/// 2. per resolving provider, in arrival order: optionally `append` and
///    `update_count` (when the filtered batch is non-empty), then
///    `progress(completed, n)` with `completed` strictly increasing
/// 3. `clear_progress()` exactly once, after `progress(n, n)`
/// 4. exactly one of `no_results` or `settle`
///
/// A run that is superseded by a newer one stops emitting instead of
/// completing steps 3–4.
pub trait SearchSink: Send + Sync {
    /// Progress indicator update: `completed` of `total` providers done.
    fn progress(&self, completed: usize, total: usize);

    /// Remove the progress indicator. Called once per completed run.
    fn clear_progress(&self);

    /// Append one filtered provider batch to the visible result list.
    fn append(&self, batch: &[VideoItem]);

    /// Update the accumulated result count display.
    fn update_count(&self, total: usize);

    /// Render the "no results" placeholder for `query`.
    fn no_results(&self, query: &str);

    /// Re-render the full accumulated result list in settled order.
    fn settle(&self, sorted: &[VideoItem]);

    /// Show a user-facing notice (toast), e.g. for input validation.
    fn notify(&self, message: &str, level: NoticeLevel);
}

/// Sink that discards every event.
///
/// Used by the blocking convenience path in [`crate::search`], where the
/// caller only wants the settled result list.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SearchSink for NullSink {
    fn progress(&self, _completed: usize, _total: usize) {}
    fn clear_progress(&self) {}
    fn append(&self, _batch: &[VideoItem]) {}
    fn update_count(&self, _total: usize) {}
    fn no_results(&self, _query: &str) {}
    fn settle(&self, _sorted: &[VideoItem]) {}
    fn notify(&self, _message: &str, _level: NoticeLevel) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_all_events() {
        let sink = NullSink;
        sink.progress(0, 3);
        sink.append(&[]);
        sink.update_count(0);
        sink.progress(3, 3);
        sink.clear_progress();
        sink.no_results("查询");
        sink.settle(&[]);
        sink.notify("提示", NoticeLevel::Info);
    }

    #[test]
    fn null_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NullSink>();
    }

    #[test]
    fn notice_level_equality() {
        assert_eq!(NoticeLevel::Info, NoticeLevel::Info);
        assert_ne!(NoticeLevel::Warning, NoticeLevel::Error);
    }

    #[test]
    fn trait_object_usable() {
        let sink: &dyn SearchSink = &NullSink;
        sink.progress(1, 2);
        sink.notify("ok", NoticeLevel::Success);
    }
}
