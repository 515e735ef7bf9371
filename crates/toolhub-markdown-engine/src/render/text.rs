//! Plain-text output: markup removed, structure kept with simple prefixes.

use crate::parsing::{inline::plain_text, paragraph::RenderNode};

use super::document::{RenderedBlock, RenderedDocument};

pub const BULLET: &str = "• ";
pub const QUOTE_BAR: &str = "│ ";
pub const CODE_INDENT: &str = "    ";

/// Renders the document as lines of plain text.
pub fn to_lines(doc: &RenderedDocument) -> Vec<String> {
    let mut lines = vec![];
    for block in &doc.blocks {
        match block {
            RenderedBlock::Code { label, text, .. } => {
                if !label.is_empty() {
                    lines.push(format!("[{label}]"));
                }
                lines.extend(text.split('\n').map(|l| format!("{CODE_INDENT}{l}")));
            }
            RenderedBlock::Paragraph { nodes } => {
                for node in nodes {
                    push_node(&mut lines, node);
                }
            }
        }
    }
    lines
}

pub fn to_plain_text(doc: &RenderedDocument) -> String {
    let mut out = to_lines(doc).join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn push_node(lines: &mut Vec<String>, node: &RenderNode) {
    match node {
        RenderNode::Heading { text, .. } | RenderNode::Paragraph { text } => {
            lines.push(plain_text(text));
        }
        RenderNode::BlockQuote { text } => lines.push(format!("{QUOTE_BAR}{}", plain_text(text))),
        RenderNode::TableRow { cells } => lines.push(
            cells
                .iter()
                .map(|c| plain_text(c))
                .collect::<Vec<_>>()
                .join(" | "),
        ),
        RenderNode::List { items } => {
            lines.extend(items.iter().map(|i| format!("{BULLET}{}", plain_text(i))));
        }
        RenderNode::Spacer => lines.push(String::new()),
    }
}
