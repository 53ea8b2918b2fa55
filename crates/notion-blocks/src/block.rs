//! Block value types.
//!
//! A [`Block`] is the flat, top-level unit exchanged with the Notion API.
//! Only the subset of block kinds listed in [`BlockKind`] is modelled;
//! nested children and inline styling are not represented.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Value, json};

/// The block kinds this crate can produce and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
    Paragraph,
    Code,
    Quote,
    Todo,
}

impl BlockKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::BulletedListItem,
        BlockKind::NumberedListItem,
        BlockKind::Paragraph,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::Todo,
    ];

    /// The `type` string the Notion API uses for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading1 => "heading_1",
            BlockKind::Heading2 => "heading_2",
            BlockKind::Heading3 => "heading_3",
            BlockKind::BulletedListItem => "bulleted_list_item",
            BlockKind::NumberedListItem => "numbered_list_item",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::Todo => "to_do",
        }
    }

    /// Look up a kind by its API `type` string.
    ///
    /// Returns `None` for block types outside the supported subset.
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific block fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BlockExtra {
    #[default]
    None,
    /// Language tag of a code block. May be empty.
    Code { language: String },
    /// Completion state of a to-do item.
    Todo { checked: bool },
}

/// A single flat block.
///
/// Blocks are plain values: each rich-text run is an unstyled string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub rich_text: Vec<String>,
    pub extra: BlockExtra,
}

impl Block {
    /// Create a block of `kind` holding a single text run.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        let extra = match kind {
            BlockKind::Code => BlockExtra::Code {
                language: String::new(),
            },
            BlockKind::Todo => BlockExtra::Todo { checked: false },
            _ => BlockExtra::None,
        };
        Self {
            kind,
            rich_text: vec![text.into()],
            extra,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        let kind = match level {
            1 => BlockKind::Heading1,
            2 => BlockKind::Heading2,
            _ => BlockKind::Heading3,
        };
        Self::new(kind, text)
    }

    pub fn bulleted(text: impl Into<String>) -> Self {
        Self::new(BlockKind::BulletedListItem, text)
    }

    pub fn numbered(text: impl Into<String>) -> Self {
        Self::new(BlockKind::NumberedListItem, text)
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Quote, text)
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            rich_text: vec![text.into()],
            extra: BlockExtra::Code {
                language: language.into(),
            },
        }
    }

    pub fn todo(text: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: BlockKind::Todo,
            rich_text: vec![text.into()],
            extra: BlockExtra::Todo { checked },
        }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.rich_text.concat()
    }

    /// Encode as the JSON object the Notion API accepts as a child block.
    pub fn to_value(&self) -> Value {
        // Serializing into a Value cannot fail: all keys are strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rich_text: Vec<Value> = self
            .rich_text
            .iter()
            .map(|run| json!({"type": "text", "text": {"content": run}}))
            .collect();

        let mut body = serde_json::Map::new();
        body.insert("rich_text".to_string(), Value::Array(rich_text));
        match &self.extra {
            BlockExtra::None => {}
            BlockExtra::Code { language } => {
                body.insert("language".to_string(), Value::String(language.clone()));
            }
            BlockExtra::Todo { checked } => {
                body.insert("checked".to_string(), Value::Bool(*checked));
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind.as_str())?;
        map.serialize_entry(self.kind.as_str(), &body)?;
        map.end()
    }
}
