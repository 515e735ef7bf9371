use xi_rope::Rope;

use crate::parsing::blocks::{Block, kinds::CodeFence};

/// Panics if `blocks` break a structural guarantee of the block parser.
pub fn check(rope: &Rope, blocks: &[Block]) {
    let n = rope.len();
    let mut prev_end = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block spans overlap or are out of order: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        assert!(
            !b.text.split('\n').any(CodeFence::is_fence),
            "fence line leaked into block text: {:?}",
            b.text
        );
        if !b.is_code() {
            assert!(
                !b.text.trim().is_empty(),
                "blank paragraph block at {:?}",
                b.span
            );
        }
    }
}
