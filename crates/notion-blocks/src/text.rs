//! Plain-text extraction from Notion payloads.
//!
//! All lookups here tolerate missing or mistyped fields and fall back to
//! empty text.

use serde_json::Value;

/// Title returned when a property map has no `title` entry.
pub const UNTITLED: &str = "Untitled";

/// Concatenates the `plain_text` of each rich-text run, in order.
///
/// Runs without a string `plain_text` contribute nothing. A non-array
/// input yields an empty string.
///
/// # Example
/// ```
/// use notion_blocks::text::extract_text;
/// use serde_json::json;
///
/// let runs = json!([{"plain_text": "Hello, "}, {"plain_text": "world"}]);
/// assert_eq!(extract_text(&runs), "Hello, world");
/// ```
pub fn extract_text(rich_text: &Value) -> String {
    rich_text
        .as_array()
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Returns the text of the first `title`-typed property, scanning in the
/// order the properties were received.
///
/// Falls back to [`UNTITLED`] when no property has `"type": "title"`.
pub fn extract_title(properties: &Value) -> String {
    properties
        .as_object()
        .and_then(|props| {
            props
                .values()
                .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        })
        .map(|prop| extract_text(prop.get("title").unwrap_or(&Value::Null)))
        .unwrap_or_else(|| UNTITLED.to_string())
}
