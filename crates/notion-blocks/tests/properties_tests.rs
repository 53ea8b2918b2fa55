//! Integration tests for title extraction and property coercion.

use notion_blocks::{UNTITLED, coerce_properties, extract_title};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn test_first_key_becomes_title_even_for_plain_strings() {
    let input = json!({"Name": "Task A", "Done": true, "Priority": 2});
    let props = coerce_properties(input.as_object().unwrap());

    let names: Vec<&str> = props.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Name", "Done", "Priority"]);

    assert_eq!(props["Name"], json!({"title": [{"text": {"content": "Task A"}}]}));
    assert!(props["Name"].get("rich_text").is_none());
    assert_eq!(props["Done"], json!({"checkbox": true}));
    assert_eq!(props["Priority"], json!({"number": 2}));
}

#[test]
fn test_order_of_insertion_decides_title() {
    let input: Value =
        serde_json::from_str(r#"{"Zeta": "first", "Alpha": "second"}"#).unwrap();
    let props = coerce_properties(input.as_object().unwrap());

    assert!(props["Zeta"].get("title").is_some());
    assert!(props["Alpha"].get("rich_text").is_some());
}

#[test]
fn test_empty_map() {
    let props = coerce_properties(&serde_json::Map::new());
    assert!(props.is_empty());
}

#[test]
fn test_title_extraction_from_page_properties() {
    let props: Value = serde_json::from_str(
        r#"{
            "Status": {"id": "a1", "type": "status", "status": {"name": "Open"}},
            "Name": {"id": "title", "type": "title", "title": [
                {"type": "text", "plain_text": "Rep"},
                {"type": "text", "plain_text": "ort"}
            ]}
        }"#,
    )
    .unwrap();
    assert_eq!(extract_title(&props), "Report");
}

#[test]
fn test_title_extraction_without_title() {
    let props = json!({"Status": {"type": "status"}, "Count": {"type": "number", "number": 3}});
    assert_eq!(extract_title(&props), UNTITLED);
}
