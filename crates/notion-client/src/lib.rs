//! Notion REST API client
//!
//! A thin bearer-token client over `reqwest`. Responses are returned as raw
//! JSON so callers can read them with optional lookups; nothing here
//! validates payload shapes.
//!
//! The [`NotionApi`] trait is the seam between the MCP tool handlers and
//! the network, and [`NotionClient`] is its HTTP implementation.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod ids;

pub use api::NotionApi;
pub use client::NotionClient;
pub use config::NotionConfig;
pub use error::{Error, Result};
pub use ids::normalize_id;
