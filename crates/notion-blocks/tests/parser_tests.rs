//! Integration tests for markup parsing.

use notion_blocks::parser::markup_to_blocks;
use notion_blocks::{Block, BlockKind};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[test]
fn test_empty_content_returns_empty_vec() {
    assert!(markup_to_blocks("").is_empty());
}

#[test]
fn test_blank_lines_only_returns_empty_vec() {
    assert!(markup_to_blocks("\n   \n\t\n\n").is_empty());
}

#[test]
fn test_heading_then_body() {
    let blocks = markup_to_blocks("# Title\n\nBody");
    assert_eq!(blocks, vec![Block::heading(1, "Title"), Block::paragraph("Body")]);
}

#[test]
fn test_code_fence_lines_dropped() {
    let blocks = markup_to_blocks("```python\nprint(1)\n```");
    assert_eq!(blocks, vec![Block::paragraph("print(1)")]);
}

#[rstest]
#[case("### Deep", BlockKind::Heading3, "Deep")]
#[case("## Mid", BlockKind::Heading2, "Mid")]
#[case("# Top", BlockKind::Heading1, "Top")]
#[case("- dash item", BlockKind::BulletedListItem, "dash item")]
#[case("* star item", BlockKind::BulletedListItem, "star item")]
#[case("#### four hashes", BlockKind::Paragraph, "#### four hashes")]
#[case("1. numbered", BlockKind::Paragraph, "1. numbered")]
#[case("> quoted", BlockKind::Paragraph, "> quoted")]
#[case("- [ ] task", BlockKind::BulletedListItem, "[ ] task")]
fn test_line_classification(#[case] line: &str, #[case] kind: BlockKind, #[case] text: &str) {
    let blocks = markup_to_blocks(line);
    assert_eq!(blocks, vec![Block::new(kind, text)]);
}

#[rstest]
#[case("just words")]
#[case("  indented - not a bullet")]
#[case("#hashtag")]
#[case("**bold** stays literal")]
fn test_unrecognised_lines_are_verbatim_paragraphs(#[case] line: &str) {
    let blocks = markup_to_blocks(&format!("{line}   "));
    assert_eq!(blocks, vec![Block::paragraph(line)]);
}

#[test]
fn test_order_preserved() {
    let blocks = markup_to_blocks("# A\n- b\nc\n## D");
    let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading1,
            BlockKind::BulletedListItem,
            BlockKind::Paragraph,
            BlockKind::Heading2,
        ]
    );
}

#[test]
fn test_crlf_line_endings_are_trimmed() {
    let blocks = markup_to_blocks("# Title\r\nBody\r\n");
    assert_eq!(blocks, vec![Block::heading(1, "Title"), Block::paragraph("Body")]);
}

#[test]
fn test_parsed_blocks_encode_to_api_shape() {
    let blocks = markup_to_blocks("- item");
    assert_eq!(
        blocks[0].to_value(),
        json!({
            "type": "bulleted_list_item",
            "bulleted_list_item": {
                "rich_text": [{"type": "text", "text": {"content": "item"}}]
            }
        })
    );
}
