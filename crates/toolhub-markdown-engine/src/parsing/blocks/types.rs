use serde::Serialize;

use crate::parsing::rope::span::Span;

/// The kind of a top-level block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    /// Everything between fences. Rendered line by line.
    Paragraph,
    /// A fenced code block, shown verbatim.
    Code {
        /// Trimmed tag from the opening fence; empty when there was none.
        language: String,
    },
}

/// A parsed top-level block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(flatten)]
    pub kind: BlockKind,
    /// Block lines joined with `\n`. Fence lines are never included.
    pub text: String,
    /// Byte span of the source lines this block was built from, fence lines
    /// and the final line ending included.
    pub span: Span,
}

impl Block {
    pub fn paragraph(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            span,
        }
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: BlockKind::Code {
                language: language.into(),
            },
            text: text.into(),
            span,
        }
    }

    /// The fence language for code blocks, `None` for paragraphs.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Code { language } => Some(language),
            BlockKind::Paragraph => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self.kind, BlockKind::Code { .. })
    }
}
