use crate::parsing::rope::span::Span;

use super::{classify::LineClass, types::Block};

#[derive(Debug, Clone)]
enum LeafState {
    /// Accumulating paragraph lines (possibly none yet).
    Paragraph,
    /// Inside a code fence opened by the line at `open`.
    Fence { language: String, open: Span },
}

/// Builds top-level blocks from classified lines.
///
/// Lines accumulate in a buffer; every fence line either flushes the buffer
/// as a paragraph and opens a fence, or emits the buffer as a code block and
/// closes the fence. Fence lines themselves never enter the buffer.
pub struct BlockBuilder {
    leaf: LeafState,
    lines: Vec<String>,
    lines_span: Option<Span>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::Paragraph,
            lines: vec![],
            lines_span: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match &c.fence_tag {
            Some(tag) => self.on_fence(tag, c.line),
            None => self.extend(c),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        match std::mem::replace(&mut self.leaf, LeafState::Paragraph) {
            LeafState::Fence { language, open } => {
                if !self.lines.is_empty() {
                    log::debug!("unterminated ```{language} fence at EOF, emitting code block");
                    let span = self.lines_span.map_or(open, |sp| open.cover(sp));
                    self.emit_code(language, span);
                }
            }
            LeafState::Paragraph => self.flush_paragraph(),
        }
        self.out
    }

    fn on_fence(&mut self, tag: &str, line: Span) {
        match std::mem::replace(&mut self.leaf, LeafState::Paragraph) {
            LeafState::Paragraph => {
                self.flush_paragraph();
                log::trace!("fence opened at {}, language {tag:?}", line.start);
                self.leaf = LeafState::Fence {
                    language: tag.to_string(),
                    open: line,
                };
            }
            LeafState::Fence { language, open } => {
                log::trace!("fence closed at {}", line.start);
                self.emit_code(language, open.cover(line));
            }
        }
    }

    fn extend(&mut self, c: &LineClass) {
        self.lines.push(c.text.clone());
        self.lines_span = Some(match self.lines_span {
            Some(sp) => sp.cover(c.line),
            None => c.line,
        });
    }

    fn take_text(&mut self) -> String {
        self.lines_span = None;
        std::mem::take(&mut self.lines).join("\n")
    }

    fn emit_code(&mut self, language: String, span: Span) {
        let text = self.take_text();
        self.out.push(Block::code(language, text, span));
    }

    fn flush_paragraph(&mut self) {
        // Blank-only buffers never become blocks.
        if self.lines.iter().all(|l| l.trim().is_empty()) {
            self.lines.clear();
            self.lines_span = None;
            return;
        }
        let span = self.lines_span.unwrap_or(Span { start: 0, end: 0 });
        let text = self.take_text();
        self.out.push(Block::paragraph(text, span));
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::classify::MarkdownLineClassifier;
    use crate::parsing::rope::lines_with_spans;
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn build(s: &str) -> Vec<Block> {
        let rope = Rope::from(s);
        let mut builder = BlockBuilder::new();
        for lr in lines_with_spans(&rope) {
            builder.push(&MarkdownLineClassifier.classify(&lr));
        }
        builder.finish()
    }

    #[test]
    fn paragraph_code_paragraph() {
        let blocks = build("a\n```js\nconsole.log(1)\n```\nb");
        assert_eq!(
            blocks,
            vec![
                Block::paragraph("a", Span { start: 0, end: 2 }),
                Block::code("js", "console.log(1)", Span { start: 2, end: 27 }),
                Block::paragraph("b", Span { start: 27, end: 28 }),
            ]
        );
    }

    #[test]
    fn unterminated_fence_still_emits_code() {
        let blocks = build("```py\nprint(1)");
        assert_eq!(
            blocks,
            vec![Block::code("py", "print(1)", Span { start: 0, end: 14 })]
        );
    }

    #[test]
    fn empty_unterminated_fence_emits_nothing() {
        assert!(build("```py\n").is_empty());
    }

    #[test]
    fn empty_closed_fence_emits_empty_code_block() {
        let blocks = build("```\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language(), Some(""));
        assert_eq!(blocks[0].text, "");
    }

    #[test]
    fn closing_fence_may_carry_a_tag() {
        let blocks = build("```js\nx\n```js\ny");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language(), Some("js"));
        assert_eq!(blocks[0].text, "x");
        assert_eq!(blocks[1].text, "y");
        assert!(!blocks[1].is_code());
    }

    #[test]
    fn blank_lines_between_fences_are_dropped() {
        let blocks = build("```\na\n```\n\n  \n```\nb\n```");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(Block::is_code));
    }

    #[test]
    fn crlf_lines_are_normalized() {
        let blocks = build("a\r\nb\r\n```\r\nc\r\n```\r\n");
        assert_eq!(blocks[0].text, "a\nb");
        assert_eq!(blocks[1].text, "c");
    }

    #[test]
    fn code_keeps_markdown_verbatim() {
        let blocks = build("```md\n# not a heading\n- nor a list\n```");
        assert_eq!(blocks[0].text, "# not a heading\n- nor a list");
    }
}
