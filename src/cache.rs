//! In-memory cache for settled search results.
//!
//! Caches the final settled (filtered, sorted) result list keyed by the
//! (lowercased query, provider set, filter flag) triple. Uses [`moka`]
//! for async-friendly caching with TTL and automatic eviction. Only the
//! blocking convenience path uses this — incremental runs always go to
//! the network.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;

use crate::types::{ProviderSite, VideoItem};

/// Maximum number of cached result sets.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Global process-wide result cache, lazily initialised on first access.
/// TTL is fixed by the first initialising call.
static CACHE: OnceLock<Cache<CacheKey, Vec<VideoItem>>> = OnceLock::new();

/// Composite cache key: normalised query + provider set hash + filter flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Lowercased, trimmed query string.
    query: String,
    /// Hash of the sorted provider code set, so different selections
    /// produce different entries regardless of order.
    provider_hash: u64,
    /// Filter preference baked into the key — toggling the filter must
    /// never surface a cached unfiltered list.
    filter_enabled: bool,
}

impl CacheKey {
    /// Build a deterministic cache key.
    ///
    /// The query is lowercased and trimmed; provider codes are sorted
    /// before hashing so selection order does not matter.
    pub fn new(query: &str, providers: &[ProviderSite], filter_enabled: bool) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            provider_hash: hash_providers(providers),
            filter_enabled,
        }
    }
}

fn get_or_init_cache(ttl_seconds: u64) -> &'static Cache<CacheKey, Vec<VideoItem>> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build()
    })
}

/// Look up cached results, `None` on miss.
pub async fn get(key: &CacheKey, ttl_seconds: u64) -> Option<Vec<VideoItem>> {
    get_or_init_cache(ttl_seconds).get(key).await
}

/// Insert settled results into the cache.
pub async fn insert(key: CacheKey, results: Vec<VideoItem>, ttl_seconds: u64) {
    get_or_init_cache(ttl_seconds).insert(key, results).await;
}

/// Deterministic, order-independent hash of a provider set.
fn hash_providers(providers: &[ProviderSite]) -> u64 {
    let mut codes: Vec<&str> = providers.iter().map(|p| p.code.as_str()).collect();
    codes.sort_unstable();
    let mut hasher = DefaultHasher::new();
    for code in codes {
        code.hash(&mut hasher);
    }
    hasher.finish()
}
