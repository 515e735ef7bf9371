use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::InlineSpan;

/// Inline code `` `text` ``.
pub struct CodeSpan;

impl CodeSpan {
    pub fn pattern() -> &'static Regex {
        static CODE_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_SPAN_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }

    pub fn build(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Code(caps[1].to_string())
    }
}
