//! Core types for video search results and provider identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video entry returned by a content provider.
///
/// Immutable once received: the aggregator only accumulates, filters,
/// and reorders items — it never edits their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Provider-scoped identifier (`vod_id` on the wire).
    pub id: String,
    /// Display title (`vod_name` on the wire).
    pub title: String,
    /// Category label, e.g. "动作片". Target of the content filter.
    pub type_name: String,
    /// Release year, when the provider reports one.
    pub year: Option<String>,
    /// Free-form remarks, e.g. "更新至20集".
    pub remarks: Option<String>,
    /// Cover image URL. Only kept when it is an absolute http(s) URL.
    pub cover_url: Option<String>,
    /// Human-readable name of the provider that returned this item.
    pub source_name: String,
    /// Short provider code, stable across renames.
    pub source_code: String,
    /// Base API URL of the originating provider, when known.
    pub api_url: Option<String>,
}

/// A content provider: an Apple-CMS-style video search API source.
///
/// Providers are identified by `code`; `name` is what gets stamped onto
/// results as [`VideoItem::source_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSite {
    /// Short opaque identifier, unique within a configuration.
    pub code: String,
    /// Human-readable provider name.
    pub name: String,
    /// Base URL of the provider's `videolist` endpoint.
    pub api_url: String,
}

impl ProviderSite {
    /// Construct a provider entry from its three identity parts.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            api_url: api_url.into(),
        }
    }
}

impl fmt::Display for ProviderSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
