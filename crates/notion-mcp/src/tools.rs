//! MCP tool definitions
//!
//! The tools the server advertises through `tools/list`, each with a JSON
//! Schema for its arguments. Execution lives in [`crate::handlers`].
//!
//! # Tools
//!
//! ## Discovery
//! - `notion_search` - Search pages and databases by title or content
//! - `notion_list_databases` - List databases the integration can access
//!
//! ## Pages
//! - `notion_get_page` - Read a page as markup
//! - `notion_create_page` - Create a page under a page or database
//! - `notion_append_content` - Append markup to an existing page
//!
//! ## Databases
//! - `notion_query_database` - List entries, optionally filtered by a text property
//! - `notion_create_database_item` - Create an entry from a flat property map

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "notion_search".to_string(),
            description: "Search Notion pages and databases by title or content".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search keywords"
                    },
                    "filter": {
                        "type": "string",
                        "enum": ["page", "database"],
                        "description": "Only return pages or only databases"
                    },
                    "page_size": {
                        "type": "integer",
                        "description": "Number of results to return (default 10)"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "notion_get_page".to_string(),
            description: "Read a Notion page. Returns the page title and its content as markdown"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "page_id": {
                        "type": "string",
                        "description": "Page ID or page URL (from search results or the browser)"
                    }
                },
                "required": ["page_id"]
            }),
        },
        ToolDefinition {
            name: "notion_create_page".to_string(),
            description: "Create a new Notion page under a parent page or database".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "parent_id": {
                        "type": "string",
                        "description": "ID of the parent page or database"
                    },
                    "parent_type": {
                        "type": "string",
                        "enum": ["page_id", "database_id"],
                        "description": "Whether the parent is a page (page_id) or a database (database_id)"
                    },
                    "title": {
                        "type": "string",
                        "description": "Page title"
                    },
                    "content": {
                        "type": "string",
                        "description": "Page content (markdown: #, ##, ### headings, - or * bullets, paragraphs)"
                    }
                },
                "required": ["parent_id", "parent_type", "title"]
            }),
        },
        ToolDefinition {
            name: "notion_append_content".to_string(),
            description: "Append content to an existing Notion page".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "page_id": {
                        "type": "string",
                        "description": "Page ID"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to append (markdown)"
                    }
                },
                "required": ["page_id", "content"]
            }),
        },
        ToolDefinition {
            name: "notion_list_databases".to_string(),
            description: "List the Notion databases this integration can access".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "page_size": {
                        "type": "integer",
                        "description": "Number of databases to return (default 10)"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "notion_query_database".to_string(),
            description: "Query a Notion database for its entries, optionally filtered by a text property"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "database_id": {
                        "type": "string",
                        "description": "Database ID"
                    },
                    "filter_property": {
                        "type": "string",
                        "description": "Name of the text property to filter on"
                    },
                    "filter_value": {
                        "type": "string",
                        "description": "Text the property must contain"
                    },
                    "page_size": {
                        "type": "integer",
                        "description": "Number of entries to return (default 10)"
                    }
                },
                "required": ["database_id"]
            }),
        },
        ToolDefinition {
            name: "notion_create_database_item".to_string(),
            description: "Create a new entry in a Notion database".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "database_id": {
                        "type": "string",
                        "description": "Database ID"
                    },
                    "properties": {
                        "type": "object",
                        "description": "Entry properties as {name: value}. The first string value becomes the title; other strings become text, booleans checkboxes, numbers numbers"
                    }
                },
                "required": ["database_id", "properties"]
            }),
        },
    ]
}

/// Look up a tool definition by name
pub fn find_tool(name: &str) -> Option<ToolDefinition> {
    get_tool_definitions().into_iter().find(|t| t.name == name)
}
