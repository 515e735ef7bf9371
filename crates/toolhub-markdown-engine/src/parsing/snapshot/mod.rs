//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable, serializable `Snap`
//!   format for `insta` snapshot testing, one readable string per node
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds
//!   and ordered, no fence lines inside block text, no blank paragraph blocks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
