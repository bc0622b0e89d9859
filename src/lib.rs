//! # vod-search
//!
//! Embeddable multi-provider video search aggregation.
//!
//! Given a query and a set of Apple-CMS-style content providers, this
//! crate fans out one lookup per provider concurrently, streams each
//! filtered batch to a presentation sink as it arrives, tracks
//! completion, and performs a single stable settle sort once every
//! provider has reported.
//!
//! ## Design
//!
//! - Concurrent fan-out with arrival-ordered incremental delivery:
//!   results from fast providers appear before slow ones resolve
//! - Two-phase rendering contract: intermediate renders are unsorted
//!   (arrival order), then exactly one settle pass reorders everything
//!   by title and source name
//! - Preference-gated category denylist applied per batch, before
//!   anything reaches the sink
//! - Per-provider failures are logged and counted, never fatal to a run
//! - Generation-tagged sessions: starting a new run retires the
//!   previous one, so stale completions never touch the UI
//!
//! ## Usage
//!
//! Incremental embedding: implement [`SearchSink`] over your UI and
//! drive [`SearchSession::run`]. Blocking convenience: call [`search`]
//! and receive the settled result list directly.

pub mod aggregator;
pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod provider;
pub mod providers;
pub mod sink;
pub mod types;

pub use aggregator::SearchSession;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use provider::ProviderTrait;
pub use providers::CmsProvider;
pub use sink::{NoticeLevel, NullSink, SearchSink};
pub use types::{ProviderSite, VideoItem};

/// Search all configured providers and return the settled result list.
///
/// Convenience wrapper for callers that do not need incremental
/// delivery: runs a full aggregation pass against the providers in
/// `config` with a discarding sink, returning once every provider has
/// reported. Settled results are cached when `config.cache_ttl_seconds`
/// is non-zero.
///
/// An empty vector means no provider contributed a surviving result —
/// the no-results outcome, not an error.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] for an empty query and
/// [`SearchError::Config`] for an invalid configuration. Individual
/// provider failures never fail the search.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vod_search::Result<()> {
/// let config = vod_search::SearchConfig::default();
/// let results = vod_search::search("流浪地球", &config).await?;
/// for item in &results {
///     println!("{} [{}]", item.title, item.source_name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<VideoItem>> {
    config.validate()?;

    let key = cache::CacheKey::new(query, &config.providers, config.filter_enabled);
    if config.cache_ttl_seconds > 0 {
        if let Some(hit) = cache::get(&key, config.cache_ttl_seconds).await {
            tracing::debug!(count = hit.len(), "settled results served from cache");
            return Ok(hit);
        }
    }

    let providers = CmsProvider::from_config(config);
    let session = SearchSession::new();
    let results = session.run(query, &providers, config, &NullSink).await?;

    // Transient all-fail outcomes also settle to an empty list; only
    // non-empty result sets are worth pinning.
    if config.cache_ttl_seconds > 0 && !results.is_empty() {
        cache::insert(key, results.clone(), config.cache_ttl_seconds).await;
    }
    Ok(results)
}

/// Search with default configuration.
///
/// Convenience wrapper around [`search`] using
/// [`SearchConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vod_search::Result<()> {
/// let results = vod_search::search_default("三体").await?;
/// println!("{} results", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_default(query: &str) -> Result<Vec<VideoItem>> {
    search(query, &SearchConfig::default()).await
}
