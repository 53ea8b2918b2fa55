//! The Notion operations the MCP tools rely on.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// Remote Notion API surface.
///
/// Every method returns the decoded JSON body, whatever the HTTP status.
/// Callers inspect the payload to tell results from API error objects.
/// Only transport problems surface as `Err`.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// `POST /search`
    async fn search(&self, body: &Value) -> Result<Value>;

    /// `GET /pages/{page_id}`
    async fn retrieve_page(&self, page_id: &str) -> Result<Value>;

    /// `GET /blocks/{block_id}/children`
    async fn list_block_children(&self, block_id: &str) -> Result<Value>;

    /// `PATCH /blocks/{block_id}/children`
    async fn append_block_children(&self, block_id: &str, children: &[Value]) -> Result<Value>;

    /// `POST /pages`
    async fn create_page(&self, body: &Value) -> Result<Value>;

    /// `POST /databases/{database_id}/query`
    async fn query_database(&self, database_id: &str, body: &Value) -> Result<Value>;
}
