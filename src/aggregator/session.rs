//! Generation-tagged search session: concurrent provider fan-out with
//! incremental delivery and a single settle pass.
//!
//! # Pipeline
//!
//! 1. Validate the query and provider set (no network on failure)
//! 2. Claim a new generation from the session counter
//! 3. Fan out one lookup per provider into a [`FuturesUnordered`] stream
//! 4. As each lookup resolves (arrival order, not caller order): filter
//!    the batch, append survivors, advance the progress counter
//! 5. After the last lookup: clear progress, then either the no-results
//!    path or the settle sort and final render
//!
//! The whole fan-out is a structured join: `run` itself drives the
//! stream to completion, so run completion is an awaitable future and a
//! failed lookup can never become an unobserved error. A run retires
//! itself the moment a newer run claims the session, so a stale run's
//! late completions never touch the sink.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::filter;
use crate::provider::ProviderTrait;
use crate::sink::{NoticeLevel, SearchSink};
use crate::types::VideoItem;

use super::sort;

/// Accumulated state owned by a single `run` invocation.
///
/// Invariants: `completed` never exceeds the provider count and reaches
/// it exactly once; `results` is append-only until the settle pass.
#[derive(Debug, Default)]
struct AggregationState {
    results: Vec<VideoItem>,
    completed: usize,
    found_any: bool,
}

/// A search session owning the generation counter that retires
/// superseded runs.
///
/// Each call to [`run`](SearchSession::run) claims a fresh generation.
/// When a later call claims a newer one, the older run stops emitting
/// to its sink and drops its remaining in-flight lookups.
///
/// Concurrent runs on separate sessions are fully independent — all
/// aggregation state is local to one invocation.
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: AtomicU64,
}

impl SearchSession {
    /// Create a session with no runs yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Run one aggregation pass over `providers` for `query`.
    ///
    /// Every observable event goes through `sink` (see the event
    /// ordering contract on [`SearchSink`]). The returned vector is the
    /// settled (sorted) accumulated result list; it is empty when no
    /// provider contributed a surviving result, in which case the sink
    /// saw the no-results render instead of a settle.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] for an empty (post-trim) query or
    ///   an empty provider set; also reported through `sink.notify`
    /// - [`SearchError::Config`] for an invalid configuration
    /// - [`SearchError::Superseded`] when a newer run claimed this
    ///   session mid-flight
    ///
    /// Individual provider failures are logged at warn level and count
    /// toward completion without failing the run.
    pub async fn run<P, S>(
        &self,
        query: &str,
        providers: &[P],
        config: &SearchConfig,
        sink: &S,
    ) -> Result<Vec<VideoItem>>
    where
        P: ProviderTrait,
        S: SearchSink + ?Sized,
    {
        let query = query.trim();
        if query.is_empty() {
            sink.notify("请输入搜索内容", NoticeLevel::Info);
            return Err(SearchError::Validation("query must not be empty".into()));
        }
        if providers.is_empty() {
            sink.notify("请至少选择一个数据源", NoticeLevel::Warning);
            return Err(SearchError::Validation(
                "at least one provider must be selected".into(),
            ));
        }
        config.validate()?;

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let total = providers.len();
        let mut state = AggregationState::default();

        tracing::trace!(total, generation, "search run started");
        sink.progress(0, total);

        // Fire one lookup per provider; the stream yields completions in
        // arrival order, which is the incremental render order.
        let mut lookups: FuturesUnordered<_> = providers
            .iter()
            .map(|provider| async move {
                let outcome = provider.search(query, config).await;
                (provider.code(), outcome)
            })
            .collect();

        while let Some((code, outcome)) = lookups.next().await {
            if self.current_generation() != generation {
                tracing::debug!(generation, "run superseded, dropping remaining lookups");
                return Err(SearchError::Superseded);
            }

            match outcome {
                Ok(items) if !items.is_empty() => {
                    let received = items.len();
                    let batch = filter::apply(items, config.filter_enabled);
                    tracing::debug!(
                        provider = code,
                        received,
                        kept = batch.len(),
                        "provider returned results"
                    );
                    if !batch.is_empty() {
                        state.found_any = true;
                        sink.append(&batch);
                        state.results.extend(batch);
                        sink.update_count(state.results.len());
                    }
                }
                Ok(_) => {
                    // Empty is a normal completion, not a failure.
                    tracing::debug!(provider = code, "provider returned no results");
                }
                Err(err) => {
                    tracing::warn!(provider = code, error = %err, "provider lookup failed");
                }
            }

            state.completed += 1;
            sink.progress(state.completed, total);
        }

        debug_assert_eq!(state.completed, total);
        sink.clear_progress();

        if !state.found_any {
            tracing::debug!(generation, "run finished with no results");
            sink.no_results(query);
            return Ok(Vec::new());
        }

        sort::settle(&mut state.results);
        sink.settle(&state.results);
        tracing::debug!(
            generation,
            count = state.results.len(),
            "run settled"
        );
        Ok(state.results)
    }
}
