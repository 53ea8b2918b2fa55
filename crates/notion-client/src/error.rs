//! Error types for notion-client

/// Result type for notion-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Notion API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No integration token was configured
    #[error("NOTION_TOKEN environment variable not set")]
    MissingToken,

    /// The request exceeded the configured timeout
    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token or version could not be used as a header value
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Response body was not JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
