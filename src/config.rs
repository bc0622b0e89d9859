//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, timeouts, the
//! content filter, caching, and request behaviour. The defaults carry a
//! built-in registry of public Apple CMS V10 sources.

use crate::error::SearchError;
use crate::types::ProviderSite;

/// Configuration for a video search run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which providers to query. Queried concurrently; results are
    /// delivered incrementally in arrival order.
    pub providers: Vec<ProviderSite>,
    /// Per-provider HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether the category denylist filter is applied to incoming
    /// batches. Mirrors the persisted user preference of the embedding UI.
    pub filter_enabled: bool,
    /// How long to cache settled results in seconds. Set to 0 to disable
    /// caching.
    pub cache_ttl_seconds: u64,
    /// Random delay range in milliseconds `(min, max)` before each
    /// provider request. Spreads simultaneous fan-out requests over time.
    pub request_delay_ms: (u64, u64),
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            timeout_seconds: 8,
            filter_enabled: true,
            cache_ttl_seconds: 600,
            request_delay_ms: (50, 300),
            user_agent: None,
        }
    }
}

/// Built-in registry of public CMS V10 sources.
///
/// Codes are stable identifiers; names are what the UI shows as the
/// result's source badge.
pub fn default_providers() -> Vec<ProviderSite> {
    vec![
        ProviderSite::new(
            "heimuer",
            "黑木耳",
            "https://json.heimuer.xyz/api.php/provide/vod",
        ),
        ProviderSite::new(
            "dyttzy",
            "电影天堂资源",
            "http://caiji.dyttzyapi.com/api.php/provide/vod",
        ),
        ProviderSite::new("tyyszy", "天涯资源", "https://tyyszy.com/api.php/provide/vod"),
        ProviderSite::new("ffzy", "非凡影视", "http://ffzy5.tv/api.php/provide/vod"),
    ]
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `providers` must not be empty and codes must be unique
    /// - every provider `api_url` must be a parseable absolute URL
    /// - `timeout_seconds` must be greater than 0
    /// - `request_delay_ms.0` must be <= `request_delay_ms.1`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.providers.is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be configured".into(),
            ));
        }
        let mut codes: Vec<&str> = self.providers.iter().map(|p| p.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        if codes.len() != self.providers.len() {
            return Err(SearchError::Config("provider codes must be unique".into()));
        }
        for provider in &self.providers {
            if url::Url::parse(&provider.api_url).is_err() {
                return Err(SearchError::Config(format!(
                    "provider {} has an invalid api_url",
                    provider.code
                )));
            }
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(SearchError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        Ok(())
    }
}
