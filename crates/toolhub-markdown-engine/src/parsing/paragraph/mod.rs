//! # Paragraph Rendering
//!
//! Walks the lines of a paragraph block and turns each into a render node.
//!
//! ## Line Precedence
//!
//! Lines are classified by an ordered rule table (`classify::LINE_RULES`),
//! first match wins:
//!
//! 1. list item: `- ` or `* `
//! 2. heading: `# `, `## `, `### `
//! 3. blockquote: `> `
//! 4. table row: `|...|`
//! 5. blank: empty or whitespace only
//! 6. paragraph: anything else
//!
//! Runs of list items group into one `List` node. Every other line yields
//! exactly one node. The text of each node goes through
//! [`format_inline`](crate::parsing::inline::format_inline).

pub mod classify;
pub mod kinds;
pub mod renderer;
pub mod types;

pub use classify::{LINE_RULES, LineKind, LineRule, classify_line};
pub use renderer::render_paragraph;
pub use types::RenderNode;
