//! Notion MCP Server
//!
//! A Model Context Protocol server that lets AI agents work with a Notion
//! workspace through a bearer-token integration.
//!
//! # Usage
//!
//! ```bash
//! NOTION_TOKEN=secret_... notion-mcp [--timeout-secs <secs>]
//! ```
//!
//! # Environment Variables
//!
//! - `NOTION_TOKEN`: Integration token (tool calls fail without it)
//! - `NOTION_API_BASE`: API endpoint (default: `https://api.notion.com/v1`)
//! - `NOTION_VERSION`: `Notion-Version` header (default: `2022-06-28`)
//! - `RUST_LOG`: Control log verbosity (default: `notion_mcp=info,notion_client=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::time::Duration;

use clap::Parser;
use notion_client::NotionConfig;
use notion_client::config::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_TIMEOUT_SECS, TOKEN_ENV,
    VERSION_ENV,
};
use notion_mcp::NotionMcpServer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// MCP server for Notion
#[derive(Parser)]
#[command(name = "notion-mcp")]
#[command(about = "MCP server for Notion")]
#[command(version)]
struct Args {
    /// Notion integration token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Notion API base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    api_base: String,

    /// Notion-Version header sent with every request
    #[arg(long, env = VERSION_ENV, default_value = DEFAULT_NOTION_VERSION)]
    notion_version: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "NOTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Args {
    fn config(&self) -> notion_client::Result<NotionConfig> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(notion_client::Error::MissingToken)?;

        let mut config = NotionConfig::new(token)
            .with_base_url(self.api_base.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        config.notion_version = self.notion_version.clone();
        Ok(config)
    }
}

/// Default log directives; the client crate logs non-success HTTP statuses
const LOG_DIRECTIVES: [&str; 2] = ["notion_mcp=info", "notion_client=info"];

fn log_filter(filter: EnvFilter) -> Result<EnvFilter, ParseError> {
    LOG_DIRECTIVES
        .iter()
        .try_fold(filter, |filter, directive| -> Result<EnvFilter, ParseError> {
            Ok(filter.add_directive(directive.parse()?))
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env())?)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(api_base = %args.api_base, timeout_secs = args.timeout_secs, "Starting notion-mcp server");

    let mut server = NotionMcpServer::from_config(args.config());
    server.run().await?;

    Ok(())
}
