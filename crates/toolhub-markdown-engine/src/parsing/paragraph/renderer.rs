use crate::parsing::inline::{InlineSpan, format_inline};

use super::{
    classify::{LineKind, classify_line},
    types::RenderNode,
};

/// Renders the text of a paragraph block into [`RenderNode`]s.
///
/// List items are buffered so that a run of them becomes a single
/// `List` node; every other line is emitted on its own after flushing that
/// buffer. Accepts `\n` or `\r\n` line endings.
pub fn render_paragraph(text: &str) -> Vec<RenderNode> {
    let mut out = vec![];
    if text.is_empty() {
        return out;
    }

    let mut pending: Vec<Vec<InlineSpan>> = vec![];
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify_line(line) {
            LineKind::ListItem(item) => pending.push(format_inline(item)),
            kind => {
                flush_list(&mut out, &mut pending);
                out.push(node_for(kind));
            }
        }
    }
    flush_list(&mut out, &mut pending);
    out
}

fn flush_list(out: &mut Vec<RenderNode>, pending: &mut Vec<Vec<InlineSpan>>) {
    if !pending.is_empty() {
        out.push(RenderNode::List {
            items: std::mem::take(pending),
        });
    }
}

fn node_for(kind: LineKind<'_>) -> RenderNode {
    match kind {
        LineKind::Heading { level, text } => RenderNode::Heading {
            level,
            text: format_inline(text),
        },
        LineKind::BlockQuote(text) => RenderNode::BlockQuote {
            text: format_inline(text),
        },
        LineKind::TableRow(cells) => RenderNode::TableRow {
            cells: cells.into_iter().map(format_inline).collect(),
        },
        LineKind::Blank => RenderNode::Spacer,
        LineKind::Paragraph(text) => RenderNode::Paragraph {
            text: format_inline(text),
        },
        // Only reached when called without the list buffer.
        LineKind::ListItem(item) => RenderNode::List {
            items: vec![format_inline(item)],
        },
    }
}
