//! Trait definition for pluggable content providers.
//!
//! Each provider implements [`ProviderTrait`] to expose a uniform
//! lookup interface to the aggregator. The aggregator never cares how a
//! provider talks to its backend — only that it eventually resolves with
//! a batch of items or an error.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::VideoItem;

/// A pluggable content provider backend.
///
/// Implementors query one video source and return structured
/// [`VideoItem`] values. Each provider handles its own:
///
/// - endpoint URL construction with query encoding
/// - HTTP request with appropriate headers and timeout
/// - response deserialization
/// - error classification (timeout vs. transport vs. parse)
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait ProviderTrait: Send + Sync {
    /// Look up `query` against this provider and return matching items.
    ///
    /// An empty result vector is a normal outcome, distinct from an
    /// error: it still counts as a completed lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, times out, or the
    /// response cannot be parsed.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<VideoItem>, SearchError>> + Send;

    /// Stable short identifier for this provider.
    fn code(&self) -> &str;

    /// Human-readable provider name, stamped onto results.
    fn name(&self) -> &str;
}
