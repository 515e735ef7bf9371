use serde::Serialize;

use crate::parsing::inline::InlineSpan;

/// One rendered element of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Heading { level: u8, text: Vec<InlineSpan> },
    BlockQuote { text: Vec<InlineSpan> },
    TableRow { cells: Vec<Vec<InlineSpan>> },
    /// Consecutive list-item lines.
    List { items: Vec<Vec<InlineSpan>> },
    /// One blank line.
    Spacer,
    Paragraph { text: Vec<InlineSpan> },
}
