use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::InlineSpan;

/// Markdown link `[label](url)`.
///
/// Only `http:` and `https:` targets are recognised; anything else (for
/// example `javascript:`) stays literal text.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\]]+)\]\(((?i:https?)://[^)\s]+)\)").expect("Invalid link regex")
        })
    }

    pub fn build(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        }
    }
}
