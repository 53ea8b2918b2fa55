//! MCP Tool Handlers
//!
//! Each handler reshapes the tool arguments into a Notion API request,
//! sends it through [`NotionApi`], and formats the reply as text for the
//! agent. Page content goes through `notion-blocks` in both directions.
//!
//! A reply that lacks the field a tool expects (`results`, `properties`,
//! `id`) is reported as [`Error::Api`] carrying the raw payload, which is
//! usually a Notion error object.

use notion_blocks::{
    Block, UNTITLED, blocks_to_markup, coerce_properties, extract_text, extract_title,
    markup_to_blocks,
};
use notion_client::{NotionApi, normalize_id};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{Error, Result};

/// Maximum number of children Notion accepts in a single request
pub const MAX_CHILDREN_PER_REQUEST: usize = 100;

const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(api: &dyn NotionApi, tool_name: &str, arguments: Value) -> Result<String> {
    debug!(tool = tool_name, "Dispatching tool call");

    match tool_name {
        // Discovery
        "notion_search" => handle_search(api, parse_args(arguments)?).await,
        "notion_list_databases" => handle_list_databases(api, parse_args(arguments)?).await,

        // Pages
        "notion_get_page" => handle_get_page(api, parse_args(arguments)?).await,
        "notion_create_page" => handle_create_page(api, parse_args(arguments)?).await,
        "notion_append_content" => handle_append_content(api, parse_args(arguments)?).await,

        // Databases
        "notion_query_database" => handle_query_database(api, parse_args(arguments)?).await,
        "notion_create_database_item" => {
            handle_create_database_item(api, parse_args(arguments)?).await
        }

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Deserialize tool arguments; a missing argument object counts as empty.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArgument(e.to_string()))
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

// ============================================================================
// Discovery Handlers
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ObjectFilter {
    Page,
    Database,
}

impl ObjectFilter {
    fn as_str(&self) -> &'static str {
        match self {
            ObjectFilter::Page => "page",
            ObjectFilter::Database => "database",
        }
    }
}

/// Arguments for notion_search
#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    filter: Option<ObjectFilter>,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

/// Handle notion_search - Search pages and databases
async fn handle_search(api: &dyn NotionApi, args: SearchArgs) -> Result<String> {
    let mut payload = json!({
        "query": args.query,
        "page_size": args.page_size,
    });
    if let Some(filter) = args.filter {
        payload["filter"] = json!({"property": "object", "value": filter.as_str()});
    }

    let data = api.search(&payload).await?;
    let Some(results) = data.get("results").and_then(Value::as_array) else {
        return Err(Error::api("Search", &data));
    };

    let entries: Vec<String> = results
        .iter()
        .filter_map(|item| {
            let id = str_field(item, "id");
            match str_field(item, "object") {
                "page" => {
                    let title = extract_title(item.get("properties").unwrap_or(&Value::Null));
                    Some(format!("📄 Page: {}\n   ID: {}", title, id))
                }
                "database" => {
                    let title = extract_text(item.get("title").unwrap_or(&Value::Null));
                    Some(format!("📊 Database: {}\n   ID: {}", title, id))
                }
                _ => None,
            }
        })
        .collect();

    if entries.is_empty() {
        return Ok("No matching results found".to_string());
    }
    Ok(entries.join("\n\n"))
}

/// Arguments for notion_list_databases
#[derive(Debug, Deserialize)]
struct ListDatabasesArgs {
    #[serde(default = "default_page_size")]
    page_size: u32,
}

/// Handle notion_list_databases - List accessible databases
async fn handle_list_databases(api: &dyn NotionApi, args: ListDatabasesArgs) -> Result<String> {
    let payload = json!({
        "filter": {"property": "object", "value": "database"},
        "page_size": args.page_size,
    });

    let data = api.search(&payload).await?;
    let Some(results) = data.get("results").and_then(Value::as_array) else {
        return Err(Error::api("List databases", &data));
    };

    let entries: Vec<String> = results
        .iter()
        .map(|db| {
            let title = extract_text(db.get("title").unwrap_or(&Value::Null));
            format!("📊 {}\n   ID: {}", title, str_field(db, "id"))
        })
        .collect();

    if entries.is_empty() {
        return Ok("No databases found".to_string());
    }
    Ok(entries.join("\n\n"))
}

// ============================================================================
// Page Handlers
// ============================================================================

/// Arguments for notion_get_page
#[derive(Debug, Deserialize)]
struct GetPageArgs {
    page_id: String,
}

/// Handle notion_get_page - Render a page's title and blocks as markup
async fn handle_get_page(api: &dyn NotionApi, args: GetPageArgs) -> Result<String> {
    let page_id = normalize_id(&args.page_id);

    let page = api.retrieve_page(&page_id).await?;
    let Some(properties) = page.get("properties") else {
        return Err(Error::api("Get page", &page));
    };
    let title = extract_title(properties);

    let children = api.list_block_children(&page_id).await?;
    let blocks = children
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(format!("# {}\n\n{}", title, blocks_to_markup(blocks)))
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ParentType {
    #[default]
    PageId,
    DatabaseId,
}

impl ParentType {
    fn as_str(&self) -> &'static str {
        match self {
            ParentType::PageId => "page_id",
            ParentType::DatabaseId => "database_id",
        }
    }
}

/// Arguments for notion_create_page
#[derive(Debug, Deserialize)]
struct CreatePageArgs {
    parent_id: String,
    #[serde(default)]
    parent_type: ParentType,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: String,
}

/// Handle notion_create_page - Create a page with optional markup content
async fn handle_create_page(api: &dyn NotionApi, args: CreatePageArgs) -> Result<String> {
    let parent_id = normalize_id(&args.parent_id);
    let title = args.title.unwrap_or_else(|| UNTITLED.to_string());

    let mut payload = json!({
        "parent": { (args.parent_type.as_str()): parent_id },
        "properties": {
            "title": {"title": [{"text": {"content": title}}]}
        }
    });

    let blocks = encode_blocks(&markup_to_blocks(&args.content));
    let (first, rest) = blocks.split_at(blocks.len().min(MAX_CHILDREN_PER_REQUEST));
    if !first.is_empty() {
        payload["children"] = Value::Array(first.to_vec());
    }

    let data = api.create_page(&payload).await?;
    let Some(id) = data.get("id").and_then(Value::as_str) else {
        return Err(Error::api("Create page", &data));
    };

    let url = data.get("url").and_then(Value::as_str).unwrap_or("N/A");

    let mut written = first.len();
    if let Err(e) = append_in_batches(api, id, rest, &mut written).await {
        return Err(Error::PartialPage {
            id: id.to_string(),
            url: url.to_string(),
            written,
            total: blocks.len(),
            reason: e.to_string(),
        });
    }

    Ok(format!(
        "✅ Page created\nTitle: {}\nID: {}\nURL: {}",
        title, id, url
    ))
}

/// Arguments for notion_append_content
#[derive(Debug, Deserialize)]
struct AppendContentArgs {
    page_id: String,
    content: String,
}

/// Handle notion_append_content - Append markup to a page
async fn handle_append_content(api: &dyn NotionApi, args: AppendContentArgs) -> Result<String> {
    let page_id = normalize_id(&args.page_id);
    let blocks = encode_blocks(&markup_to_blocks(&args.content));

    let mut appended = 0;
    append_in_batches(api, &page_id, &blocks, &mut appended).await?;
    Ok(format!("✅ Content appended: {} blocks added", appended))
}

fn encode_blocks(blocks: &[Block]) -> Vec<Value> {
    blocks.iter().map(Block::to_value).collect()
}

/// Append children in request-sized batches.
///
/// Adds the number of blocks Notion reports back to `appended`, so the
/// count stays accurate when a later batch fails. Stops at the first batch
/// whose reply has no `results`.
async fn append_in_batches(
    api: &dyn NotionApi,
    block_id: &str,
    children: &[Value],
    appended: &mut usize,
) -> Result<()> {
    for batch in children.chunks(MAX_CHILDREN_PER_REQUEST) {
        let data = api.append_block_children(block_id, batch).await?;
        let Some(results) = data.get("results").and_then(Value::as_array) else {
            return Err(Error::api("Append", &data));
        };
        *appended += results.len();
    }
    Ok(())
}

// ============================================================================
// Database Handlers
// ============================================================================

/// Arguments for notion_query_database
#[derive(Debug, Deserialize)]
struct QueryDatabaseArgs {
    database_id: String,
    #[serde(default)]
    filter_property: Option<String>,
    #[serde(default)]
    filter_value: Option<String>,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

/// Handle notion_query_database - List database entries
async fn handle_query_database(api: &dyn NotionApi, args: QueryDatabaseArgs) -> Result<String> {
    let database_id = normalize_id(&args.database_id);

    let mut payload = json!({"page_size": args.page_size});
    let property = args.filter_property.filter(|p| !p.is_empty());
    let value = args.filter_value.filter(|v| !v.is_empty());
    if let (Some(property), Some(value)) = (property, value) {
        payload["filter"] = json!({
            "property": property,
            "rich_text": {"contains": value}
        });
    }

    let data = api.query_database(&database_id, &payload).await?;
    let Some(results) = data.get("results").and_then(Value::as_array) else {
        return Err(Error::api("Query", &data));
    };

    if results.is_empty() {
        return Ok("Database is empty or has no matching entries".to_string());
    }

    let rows: Vec<String> = results
        .iter()
        .map(|item| {
            let title = extract_title(item.get("properties").unwrap_or(&Value::Null));
            format!("• {} (ID: {})", title, str_field(item, "id"))
        })
        .collect();

    Ok(format!("Query results ({}):\n{}", rows.len(), rows.join("\n")))
}

/// Arguments for notion_create_database_item
#[derive(Debug, Deserialize)]
struct CreateDatabaseItemArgs {
    database_id: String,
    properties: Map<String, Value>,
}

/// Handle notion_create_database_item - Create an entry from flat properties
async fn handle_create_database_item(
    api: &dyn NotionApi,
    args: CreateDatabaseItemArgs,
) -> Result<String> {
    let database_id = normalize_id(&args.database_id);
    let payload = json!({
        "parent": {"database_id": database_id},
        "properties": coerce_properties(&args.properties),
    });

    let data = api.create_page(&payload).await?;
    match data.get("id").and_then(Value::as_str) {
        Some(id) => Ok(format!("✅ Entry created\nID: {}", id)),
        None => Err(Error::api("Create entry", &data)),
    }
}
