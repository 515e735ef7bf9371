//! # Inline Kinds
//!
//! Inline-specific types that own their syntax patterns.
//!
//! ## Types
//!
//! - **`Link`**: `[label](http(s)://...)`
//! - **`Bold`**: `**text**`
//! - **`Italic`**: `*text*`
//! - **`CodeSpan`**: `` `text` ``
//!
//! The formatter calls `pattern()`/`build()` on these; it never hardcodes
//! a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::Link;
