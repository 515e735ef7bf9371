pub mod blocks;
pub mod inline;
pub mod paragraph;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use blocks::{Block, BlockBuilder, BlockKind, MarkdownLineClassifier};
use paragraph::RenderNode;
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

pub fn parse_str(input: &str) -> ParsedDoc {
    parse_document(&Rope::from(input))
}

/// Splits `input` into ordered code and paragraph blocks.
pub fn parse_blocks(input: &str) -> Vec<Block> {
    parse_str(input).blocks
}

/// Convenience: paragraph rendering for a given block (code blocks are raw zones).
pub fn render_nodes_for_block(b: &Block) -> Vec<RenderNode> {
    if !matches!(b.kind, BlockKind::Paragraph) {
        return vec![];
    }
    paragraph::render_paragraph(&b.text)
}
