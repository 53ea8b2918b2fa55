//! Markup rendering.
//!
//! Renders block records, as returned by the Notion API, back into the
//! simplified markup accepted by [`crate::parser`]. Records are read as raw
//! JSON so that any missing field falls back to a default instead of
//! failing the whole document.

use serde_json::Value;

use crate::block::{Block, BlockExtra, BlockKind};
use crate::text::extract_text;

/// Renders block records into markup, one entry per recognised block,
/// joined with `\n`.
///
/// Block types outside the supported subset are skipped.
///
/// # Example
/// ```
/// use notion_blocks::writer::blocks_to_markup;
/// use serde_json::json;
///
/// let blocks = vec![json!({
///     "type": "to_do",
///     "to_do": {"rich_text": [{"plain_text": "Buy milk"}], "checked": true}
/// })];
/// assert_eq!(blocks_to_markup(&blocks), "- [x] Buy milk");
/// ```
pub fn blocks_to_markup(blocks: &[Value]) -> String {
    blocks
        .iter()
        .filter_map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a single block record. Returns `None` for unsupported types.
pub fn render_block(block: &Value) -> Option<String> {
    let kind = block
        .get("type")
        .and_then(Value::as_str)
        .and_then(BlockKind::from_api_name)?;
    let body = block.get(kind.as_str()).unwrap_or(&Value::Null);
    let text = extract_text(body.get("rich_text").unwrap_or(&Value::Null));

    let language = body.get("language").and_then(Value::as_str).unwrap_or("");
    let checked = body.get("checked").and_then(Value::as_bool).unwrap_or(false);

    Some(render_line(kind, &text, language, checked))
}

/// Renders typed blocks into markup.
///
/// Same rules as [`blocks_to_markup`], for blocks built in-process rather
/// than received from the API.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            let (language, checked) = match &block.extra {
                BlockExtra::Code { language } => (language.as_str(), false),
                BlockExtra::Todo { checked } => ("", *checked),
                BlockExtra::None => ("", false),
            };
            render_line(block.kind, &block.text(), language, checked)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(kind: BlockKind, text: &str, language: &str, checked: bool) -> String {
    match kind {
        BlockKind::Paragraph => text.to_string(),
        BlockKind::Heading1 => format!("# {}", text),
        BlockKind::Heading2 => format!("## {}", text),
        BlockKind::Heading3 => format!("### {}", text),
        BlockKind::BulletedListItem => format!("- {}", text),
        BlockKind::NumberedListItem => format!("1. {}", text),
        BlockKind::Code => format!("```{}\n{}\n```", language, text),
        BlockKind::Quote => format!("> {}", text),
        BlockKind::Todo => format!("- [{}] {}", if checked { 'x' } else { ' ' }, text),
    }
}
