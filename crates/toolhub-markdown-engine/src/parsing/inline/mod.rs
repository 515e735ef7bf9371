//! # Inline Formatting
//!
//! Turns the text of one classified line into styled spans.
//!
//! ## Architecture
//!
//! Formatting is a fixed sequence of global-replace passes, each driven by
//! a regex owned by its kind:
//!
//! 1. links `[label](url)` (web targets only)
//! 2. bold `**text**`
//! 3. italic `*text*`
//! 4. inline code `` `text` ``
//!
//! A pass only scans text that no earlier pass has claimed. There is no
//! nesting and no escaping.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link)
//! - **`kinds`**: per-kind patterns and span constructors
//! - **`parser`**: `format_inline()` main entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_inline;
pub use types::{InlineSpan, plain_text};
