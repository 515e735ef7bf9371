use serde::Serialize;

/// A formatted piece of a single line.
///
/// Spans never nest: once a pass has produced a span its contents are not
/// looked at again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Literal text.
    Text(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `` `text` ``
    Code(String),
    /// `[label](url)` with an `http:` or `https:` target.
    Link { label: String, url: String },
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The visible text of this span, markers removed.
    pub fn visible(&self) -> &str {
        match self {
            Self::Text(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { label, .. } => label,
        }
    }
}

/// Concatenates the visible text of `spans`.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::visible).collect()
}
