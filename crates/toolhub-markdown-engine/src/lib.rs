//! Markdown-subset rendering for AI model output.
//!
//! Text is split into code blocks and paragraph blocks, paragraph lines are
//! classified (headings, quotes, table rows, lists, blanks, plain text) and
//! their inline spans formatted. Every function here is total: any input,
//! including malformed fences, produces a best-effort render.
//!
//! ```
//! use toolhub_markdown_engine::{render, to_html};
//!
//! let doc = render("# Hello\n```js\nconsole.log(1)\n```");
//! let html = to_html(&doc);
//! assert!(html.starts_with("<h1>Hello</h1>"));
//! ```

pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockKind},
    inline::{InlineSpan, format_inline},
    paragraph::{RenderNode, render_paragraph},
    parse_blocks, parse_document, parse_str,
};
pub use render::{
    LanguageLabels, RenderedBlock, RenderedDocument, Renderer, render, to_html, to_lines,
    to_plain_text,
};
