use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::InlineSpan;

/// Strong emphasis `**text**`. Runs before [`Italic`] so that the double
/// asterisks are consumed first.
pub struct Bold;

impl Bold {
    pub fn pattern() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
    }

    pub fn build(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Bold(caps[1].to_string())
    }
}

/// Emphasis `*text*`.
pub struct Italic;

impl Italic {
    pub fn pattern() -> &'static Regex {
        static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
        ITALIC_REGEX.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"))
    }

    pub fn build(caps: &Captures<'_>) -> InlineSpan {
        InlineSpan::Italic(caps[1].to_string())
    }
}
