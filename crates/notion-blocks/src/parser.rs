//! Markup parsing.
//!
//! Turns simplified markup into a flat list of [`Block`]s:
//! ```text
//! # Heading
//! - bullet
//! plain paragraph
//! ```
//!
//! Every line is classified on its own leading tokens, with no lookahead.
//! Because of that, multi-line constructs are not recognised: fence markers
//! are dropped and the lines between them come out as paragraphs.

use crate::block::{Block, BlockKind};

const FENCE: &str = "```";

/// Prefixes tried in order. Longer heading prefixes come first.
const PREFIXES: [(&str, BlockKind); 5] = [
    ("### ", BlockKind::Heading3),
    ("## ", BlockKind::Heading2),
    ("# ", BlockKind::Heading1),
    ("- ", BlockKind::BulletedListItem),
    ("* ", BlockKind::BulletedListItem),
];

/// Parses markup into blocks, one block per non-blank line.
///
/// Never fails: unrecognised lines become paragraphs and blank lines are
/// skipped.
///
/// # Example
/// ```
/// use notion_blocks::parser::markup_to_blocks;
/// use notion_blocks::Block;
///
/// let blocks = markup_to_blocks("# Title\n\nBody");
/// assert_eq!(blocks, vec![Block::heading(1, "Title"), Block::paragraph("Body")]);
/// ```
pub fn markup_to_blocks(content: &str) -> Vec<Block> {
    content.split('\n').filter_map(parse_line).collect()
}

/// Classifies a single line. Returns `None` for lines that produce no block.
pub fn parse_line(line: &str) -> Option<Block> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    for (prefix, kind) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(Block::new(kind, rest));
        }
    }

    if line.starts_with(FENCE) {
        return None;
    }

    Some(Block::paragraph(line))
}
