use serde::Serialize;

use crate::parsing::{
    blocks::BlockKind, paragraph::RenderNode, parse_str, render_nodes_for_block,
};

use super::languages::LanguageLabels;

/// A block ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedBlock {
    /// Verbatim code with its fence tag and display label.
    Code {
        language: String,
        label: String,
        text: String,
    },
    Paragraph { nodes: Vec<RenderNode> },
}

/// The full display structure for one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub blocks: Vec<RenderedBlock>,
}

/// Parses and renders input text. Owns the language label table.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    labels: LanguageLabels,
}

impl Renderer {
    pub fn new(labels: LanguageLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &LanguageLabels {
        &self.labels
    }

    pub fn render(&self, input: &str) -> RenderedDocument {
        let doc = parse_str(input);
        let blocks = doc
            .blocks
            .iter()
            .map(|b| match &b.kind {
                BlockKind::Code { language } => RenderedBlock::Code {
                    language: language.clone(),
                    label: self.labels.label(language),
                    text: b.text.clone(),
                },
                BlockKind::Paragraph => RenderedBlock::Paragraph {
                    nodes: render_nodes_for_block(b),
                },
            })
            .collect::<Vec<_>>();

        log::debug!(
            "rendered {} bytes into {} blocks",
            input.len(),
            blocks.len()
        );
        RenderedDocument { blocks }
    }
}

/// Renders `input` with the built-in language labels.
pub fn render(input: &str) -> RenderedDocument {
    Renderer::default().render(input)
}
