//! # Block Parsing
//!
//! Splits raw text into an ordered sequence of code blocks and paragraph
//! blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding its span, its text and, for fence lines, the language tag
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` toggles between
//!    paragraph and fence mode on every fence line and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block-specific types with owned delimiters (`CodeFence`)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fence lines are consumed; they never appear in any block's text
//! - Code blocks are raw zones: no paragraph or inline parsing inside
//! - An unterminated fence at end of input still yields a code block
//! - Block spans are ordered and never overlap

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
