//! Conversion between simplified markup and Notion blocks.
//!
//! This crate is the pure core of the Notion MCP server. It performs no I/O
//! and none of its functions can fail.
//!
//! # Markup
//!
//! ```text
//! # Heading 1
//! ## Heading 2
//! ### Heading 3
//! - bullet (or "* bullet")
//! anything else is a paragraph
//! ```
//!
//! # Modules
//!
//! - [`parser`]: markup to [`Block`]s, line by line with no lookahead
//! - [`writer`]: API block records back to markup
//! - [`text`]: plain text and page title extraction
//! - [`properties`]: flat argument maps to database properties
//!
//! The conversion is lossy in both directions. Rendering and parsing once
//! more after a first round trip is stable:
//!
//! ```
//! use notion_blocks::{markup_to_blocks, render_blocks};
//!
//! let once = render_blocks(&markup_to_blocks("## Hi\n\n* item"));
//! let twice = render_blocks(&markup_to_blocks(&once));
//! assert_eq!(once, "## Hi\n- item");
//! assert_eq!(once, twice);
//! ```

pub mod block;
pub mod parser;
pub mod properties;
pub mod text;
pub mod writer;

pub use block::{Block, BlockExtra, BlockKind};
pub use parser::{markup_to_blocks, parse_line};
pub use properties::coerce_properties;
pub use text::{UNTITLED, extract_text, extract_title};
pub use writer::{blocks_to_markup, render_block, render_blocks};
