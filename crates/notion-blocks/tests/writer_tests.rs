//! Integration tests for markup rendering and round trips.

use notion_blocks::writer::{blocks_to_markup, render_blocks};
use notion_blocks::{Block, markup_to_blocks};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

/// Builds an API-style block record with a single plain-text run.
fn api_block(kind: &str, text: &str) -> Value {
    json!({
        "object": "block",
        "type": kind,
        kind: {"rich_text": [{"type": "text", "plain_text": text, "annotations": {"bold": true}}]}
    })
}

#[rstest]
#[case("paragraph", "plain")]
#[case("heading_1", "# plain")]
#[case("heading_2", "## plain")]
#[case("heading_3", "### plain")]
#[case("bulleted_list_item", "- plain")]
#[case("numbered_list_item", "1. plain")]
#[case("quote", "> plain")]
fn test_render_templates(#[case] kind: &str, #[case] expected: &str) {
    assert_eq!(blocks_to_markup(&[api_block(kind, "plain")]), expected);
}

#[test]
fn test_numbered_items_never_increment() {
    let blocks = vec![
        api_block("numbered_list_item", "one"),
        api_block("numbered_list_item", "two"),
    ];
    assert_eq!(blocks_to_markup(&blocks), "1. one\n1. two");
}

#[test]
fn test_todo_checked_and_unchecked() {
    let checked = json!({
        "type": "to_do",
        "to_do": {"rich_text": [{"plain_text": "Buy milk"}], "checked": true}
    });
    let unchecked = json!({
        "type": "to_do",
        "to_do": {"rich_text": [{"plain_text": "Buy milk"}], "checked": false}
    });
    assert_eq!(blocks_to_markup(&[checked]), "- [x] Buy milk");
    assert_eq!(blocks_to_markup(&[unchecked]), "- [ ] Buy milk");
}

#[test]
fn test_code_block_with_language() {
    let block = json!({
        "type": "code",
        "code": {"rich_text": [{"plain_text": "print(1)"}], "language": "python"}
    });
    assert_eq!(blocks_to_markup(&[block]), "```python\nprint(1)\n```");
}

#[test]
fn test_runs_concatenated_without_separator() {
    let block = json!({
        "type": "paragraph",
        "paragraph": {"rich_text": [
            {"plain_text": "Hello, "},
            {"plain_text": "bold", "annotations": {"bold": true}},
            {"href": "https://example.com"}
        ]}
    });
    assert_eq!(blocks_to_markup(&[block]), "Hello, bold");
}

#[test]
fn test_malformed_records_degrade() {
    let blocks = vec![
        json!(null),
        json!("not an object"),
        json!({"type": 42}),
        json!({"type": "paragraph", "paragraph": {"rich_text": "oops"}}),
        json!({"type": "to_do", "to_do": {"checked": "yes"}}),
        json!({"type": "column_list", "column_list": {}}),
    ];
    assert_eq!(blocks_to_markup(&blocks), "\n- [ ] ");
}

#[test]
fn test_empty_list_renders_empty_string() {
    assert_eq!(blocks_to_markup(&[]), "");
}

#[test]
fn test_heading_roundtrip_is_stable() {
    let rendered = blocks_to_markup(&[api_block("heading_2", "Hi")]);
    assert_eq!(rendered, "## Hi");
    assert_eq!(markup_to_blocks(&rendered), vec![Block::heading(2, "Hi")]);
}

#[rstest]
#[case("# Title\n\nBody\n```rust\nlet x = 1;\n```\n* star")]
#[case("- [x] done\n1. first\n> quote")]
#[case("")]
fn test_second_roundtrip_is_idempotent(#[case] doc: &str) {
    let once = render_blocks(&markup_to_blocks(doc));
    let twice = render_blocks(&markup_to_blocks(&once));
    assert_eq!(once, twice);
}

#[test]
fn test_typed_and_record_rendering_agree() {
    let typed = vec![
        Block::heading(1, "T"),
        Block::code("sh", "ls"),
        Block::todo("t", true),
        Block::quote("q"),
    ];
    let records: Vec<Value> = vec![
        api_block("heading_1", "T"),
        json!({"type": "code", "code": {"rich_text": [{"plain_text": "ls"}], "language": "sh"}}),
        json!({"type": "to_do", "to_do": {"rich_text": [{"plain_text": "t"}], "checked": true}}),
        api_block("quote", "q"),
    ];
    assert_eq!(render_blocks(&typed), blocks_to_markup(&records));
}
