use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line ending if present).
    pub span: Span,
    /// The line content without its line ending.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so that spans account for line endings; both `\n` and
/// `\r\n` are stripped from `text`. A trailing newline does not produce an
/// extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |raw| {
        let line: &str = &raw;
        let start = offset;
        offset += line.len();

        let text = line.strip_suffix('\n').unwrap_or(line);
        let text = text.strip_suffix('\r').unwrap_or(text);

        LineRef {
            span: Span { start, end: offset },
            text: text.to_string(),
        }
    })
}
