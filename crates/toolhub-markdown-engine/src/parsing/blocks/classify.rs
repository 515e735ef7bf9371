use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::CodeFence;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, line ending included.
    pub line: Span,
    /// Line content without its line ending.
    pub text: String,
    /// Language tag if the line is a fence line (empty tag for a bare fence).
    pub fence_tag: Option<String>,
}

impl LineClass {
    pub fn is_fence(&self) -> bool {
        self.fence_tag.is_some()
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            text: lr.text.clone(),
            fence_tag: CodeFence::tag(&lr.text).map(str::to_string),
        }
    }
}
