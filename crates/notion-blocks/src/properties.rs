//! Database property coercion.
//!
//! Converts a flat `{name: value}` map into Notion property values, picking
//! the property type from the JSON type of each value.

use serde_json::{Map, Value, json};

/// Coerces a flat argument map into Notion database properties.
///
/// - the first string, if no property has been emitted before it, becomes
///   the entry's `title`
/// - later strings become `rich_text`
/// - booleans become `checkbox`
/// - numbers become `number`
/// - nulls, arrays and objects are skipped
///
/// Output order follows input order. The input must come from an
/// order-preserving map, otherwise the title choice is arbitrary.
///
/// # Example
/// ```
/// use notion_blocks::properties::coerce_properties;
/// use serde_json::json;
///
/// let input = json!({"Name": "Task A", "Done": true});
/// let props = coerce_properties(input.as_object().unwrap());
/// assert!(props["Name"].get("title").is_some());
/// assert_eq!(props["Done"], json!({"checkbox": true}));
/// ```
pub fn coerce_properties(values: &Map<String, Value>) -> Map<String, Value> {
    let mut properties = Map::new();

    for (name, value) in values {
        let property = match value {
            Value::String(s) if properties.is_empty() => {
                json!({"title": [{"text": {"content": s}}]})
            }
            Value::String(s) => json!({"rich_text": [{"text": {"content": s}}]}),
            Value::Bool(b) => json!({"checkbox": b}),
            Value::Number(n) => json!({"number": n}),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        properties.insert(name.clone(), property);
    }

    properties
}
