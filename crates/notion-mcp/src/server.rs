//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling
//! with the Notion tool handlers.

use std::sync::Arc;

use notion_client::{NotionApi, NotionClient, NotionConfig};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeResult, JsonRpcRequest,
    JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, find_tool, get_tool_definitions};
use crate::{Error, Result};

/// Where tool calls are sent
enum Backend {
    Ready(Arc<dyn NotionApi>),
    /// No client could be built; tool calls report the reason
    Unavailable(String),
}

/// MCP Server for Notion
///
/// This server exposes a Notion workspace via the Model Context Protocol,
/// allowing agents to search, read and write pages and databases.
///
/// # Example
///
/// ```ignore
/// use notion_mcp::NotionMcpServer;
/// use notion_client::NotionConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = NotionMcpServer::from_config(NotionConfig::from_env());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct NotionMcpServer {
    backend: Backend,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,
}

impl NotionMcpServer {
    /// Create a server backed by the given Notion API
    pub fn new(api: Arc<dyn NotionApi>) -> Self {
        Self::with_backend(Backend::Ready(api))
    }

    /// Create a server that answers protocol requests but cannot call Notion
    ///
    /// Every tool call reports `reason` back to the agent.
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self::with_backend(Backend::Unavailable(reason.into()))
    }

    /// Create a server from a configuration attempt
    ///
    /// A missing token or an unusable configuration does not stop the
    /// server; it is reported on each tool call instead.
    pub fn from_config(config: notion_client::Result<NotionConfig>) -> Self {
        match config.and_then(|config| NotionClient::new(&config)) {
            Ok(client) => Self::new(Arc::new(client)),
            Err(e) => {
                tracing::warn!(error = %e, "Notion client unavailable, tool calls will fail");
                Self::unconfigured(e.to_string())
            }
        }
    }

    fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Initialize the server
    ///
    /// Loads the tool definitions.
    pub async fn initialize(&mut self) -> Result<()> {
        tracing::info!(configured = self.is_configured(), "Initializing MCP server");

        self.tools = get_tool_definitions();

        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server
    ///
    /// This starts the server and begins processing MCP protocol
    /// messages over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited JSON-RPC messages from `reader` to `writer`
    /// until the reader is exhausted.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if !self.initialized {
            self.initialize().await?;
        }

        tracing::info!("MCP server ready, listening on stdio");

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    tracing::debug!(request = %line.trim_end(), "Received message");
                    self.respond(line.trim_end()).await?
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding line that is not valid UTF-8");
                    serde_json::to_string(&JsonRpcResponse::error(
                        None,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                    ))?
                }
            };

            // Notifications produce no response
            if !response.is_empty() {
                writer.write_all(response.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Answer one line, turning message-level failures into JSON-RPC errors
    async fn respond(&self, line: &str) -> Result<String> {
        let response = match self.handle_message(line).await {
            Ok(response) => return Ok(response),
            Err(Error::Json(e)) => {
                JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e))
            }
            Err(e) => {
                JsonRpcResponse::error(None, INTERNAL_ERROR, format!("Internal error: {}", e))
            }
        };
        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate handler.
    ///
    /// # Arguments
    ///
    /// * `message` - The raw JSON-RPC message string
    ///
    /// # Returns
    ///
    /// The JSON-RPC response as a string, or empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = serde_json::from_str(message)?;
        let request: JsonRpcRequest = match JsonRpcRequest::deserialize(&value) {
            Ok(request) => request,
            Err(e) => {
                let response = JsonRpcResponse::error(
                    value.get("id").cloned(),
                    INVALID_REQUEST,
                    format!("Invalid Request: {}", e),
                );
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "Notification received");
            return Ok(String::new());
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id).await?,
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id).await?,
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    ///
    /// Returns server capabilities and info.
    async fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "notion-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    async fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools = get_tool_definitions();
        Ok(JsonRpcResponse::success(id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    ///
    /// Executes the requested tool. Tool failures are reported inside a
    /// successful response with `isError` set.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                ));
            }
        };

        tracing::info!(tool = %tool_params.name, "Tool call");

        let tool_result = match self.call_tool(&tool_params.name, tool_params.arguments).await {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                tracing::warn!(tool = %tool_params.name, error = %e, "Tool call failed");
                ToolResult::error(e.to_string())
            }
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String> {
        if find_tool(name).is_none() {
            return Err(Error::UnknownTool(name.to_string()));
        }

        match &self.backend {
            Backend::Ready(api) => handle_tool_call(api.as_ref(), name, arguments).await,
            Backend::Unavailable(reason) => Err(Error::NotConfigured(reason.clone())),
        }
    }

    /// Whether a Notion client is available for tool calls
    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
