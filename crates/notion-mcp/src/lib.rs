//! MCP Server for Notion
//!
//! This crate exposes a Notion workspace via the Model Context Protocol (MCP),
//! allowing AI agents to search, read and write pages and databases.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (agent / IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ notion-mcp (MCP Server) ]
//!        |                 \
//!        | (NotionApi)      +--> [ notion-blocks (markup <-> blocks) ]
//!        v
//! [ notion-client (REST) ] --> https://api.notion.com/v1
//! ```
//!
//! # Tools
//!
//! The server exposes tools for:
//! - Discovery (search, list databases)
//! - Pages (read as markup, create, append content)
//! - Databases (query with a text filter, create entries)

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use handlers::handle_tool_call;
pub use server::NotionMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
