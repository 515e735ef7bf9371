use serde::Serialize;

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::InlineSpan,
    paragraph::RenderNode,
    render_nodes_for_block,
};

#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub span: String,
    pub nodes: Vec<String>,
}

/// Converts parsed blocks into a stable, one-line-per-node structure.
///
/// Code blocks list their lines prefixed with `| `; paragraph blocks list
/// one entry per render node.
pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let kind = match &b.kind {
                BlockKind::Paragraph => "Paragraph".to_string(),
                BlockKind::Code { language } => format!("Code({language})"),
            };

            let nodes = match &b.kind {
                BlockKind::Code { .. } => b.text.split('\n').map(|l| format!("| {l}")).collect(),
                BlockKind::Paragraph => render_nodes_for_block(b).iter().map(describe_node).collect(),
            };

            BlockSnap {
                kind,
                span: format!("{}..{}", b.span.start, b.span.end),
                nodes,
            }
        })
        .collect();

    Snap { blocks }
}

pub fn describe_node(node: &RenderNode) -> String {
    match node {
        RenderNode::Heading { level, text } => format!("heading({level}): {}", describe_spans(text)),
        RenderNode::BlockQuote { text } => format!("block_quote: {}", describe_spans(text)),
        RenderNode::TableRow { cells } => format!("table_row: {}", describe_groups(cells)),
        RenderNode::List { items } => format!("list: {}", describe_groups(items)),
        RenderNode::Spacer => "spacer".to_string(),
        RenderNode::Paragraph { text } => format!("paragraph: {}", describe_spans(text)),
    }
}

pub fn describe_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| match s {
            InlineSpan::Text(t) => format!("text({t})"),
            InlineSpan::Bold(t) => format!("bold({t})"),
            InlineSpan::Italic(t) => format!("italic({t})"),
            InlineSpan::Code(t) => format!("code({t})"),
            InlineSpan::Link { label, url } => format!("link({label} -> {url})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_groups(groups: &[Vec<InlineSpan>]) -> String {
    groups
        .iter()
        .map(|g| format!("[{}]", describe_spans(g)))
        .collect::<Vec<_>>()
        .join(" ")
}
