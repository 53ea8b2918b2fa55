//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the Notion client (transport, timeout, bad payload)
    #[error(transparent)]
    Client(#[from] notion_client::Error),

    /// The Notion API answered, but not with what the tool expected
    #[error("{operation} failed: {payload}")]
    Api { operation: String, payload: String },

    /// The page exists but only part of its content was written
    #[error(
        "Page created but content is incomplete ({written} of {total} blocks written): {reason}\nID: {id}\nURL: {url}"
    )]
    PartialPage {
        id: String,
        url: String,
        written: usize,
        total: usize,
        reason: String,
    },

    /// No usable Notion client, typically a missing token
    #[error("Notion client is not configured: {0}\nSet the NOTION_TOKEN environment variable")]
    NotConfigured(String),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid argument provided
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn api(operation: &str, payload: &serde_json::Value) -> Self {
        Self::Api {
            operation: operation.to_string(),
            payload: payload.to_string(),
        }
    }
}
