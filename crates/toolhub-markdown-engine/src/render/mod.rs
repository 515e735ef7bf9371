//! # Rendering
//!
//! Turns parsed blocks into a [`RenderedDocument`] and writes it out.
//!
//! - **`document`**: `Renderer`, `RenderedDocument`, `RenderedBlock`
//! - **`languages`**: fence tag to display label table
//! - **`html`**: escaped HTML fragment
//! - **`text`**: plain text with markup stripped
//!
//! The document itself is `serde::Serialize`, which covers JSON output.

pub mod document;
pub mod html;
pub mod languages;
pub mod text;

pub use document::{RenderedBlock, RenderedDocument, Renderer, render};
pub use html::to_html;
pub use languages::{BUILTIN_LANGUAGE_LABELS, LanguageLabels};
pub use text::{to_lines, to_plain_text};
