//! Error types for the vod-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Search queries never appear in error
//! messages.

/// Errors that can occur during a video search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Caller-supplied input was rejected before any network call.
    #[error("invalid search input: {0}")]
    Validation(String),

    /// A provider request timed out. Kept distinct from [`SearchError::Http`]
    /// so callers can show a dedicated timeout message.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// An HTTP request to a provider failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a provider's JSON response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The run was retired because a newer run claimed the session.
    #[error("search superseded by a newer run")]
    Superseded,
}

/// Convenience type alias for vod-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
