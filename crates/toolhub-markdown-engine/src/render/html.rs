//! HTML fragment output.
//!
//! Text is escaped with `html-escape`; links open in a new browsing context
//! and never pass the opener or referrer.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{inline::InlineSpan, paragraph::RenderNode};

use super::document::{RenderedBlock, RenderedDocument};

pub fn to_html(doc: &RenderedDocument) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            RenderedBlock::Code {
                language,
                label,
                text,
            } => write_code(&mut out, language, label, text),
            RenderedBlock::Paragraph { nodes } => {
                for node in nodes {
                    write_node(&mut out, node);
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn write_code(out: &mut String, language: &str, label: &str, text: &str) {
    if language.is_empty() {
        out.push_str("<pre><code>");
    } else {
        let _ = write!(
            out,
            "<pre data-label=\"{}\"><code class=\"language-{}\">",
            encode_double_quoted_attribute(label),
            encode_double_quoted_attribute(language)
        );
    }
    out.push_str(&encode_text(text));
    out.push_str("</code></pre>\n");
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Heading { level, text } => {
            let _ = write!(out, "<h{level}>");
            write_spans(out, text);
            let _ = write!(out, "</h{level}>");
        }
        RenderNode::BlockQuote { text } => {
            out.push_str("<blockquote>");
            write_spans(out, text);
            out.push_str("</blockquote>");
        }
        RenderNode::TableRow { cells } => {
            out.push_str("<table><tr>");
            for cell in cells {
                out.push_str("<td>");
                write_spans(out, cell);
                out.push_str("</td>");
            }
            out.push_str("</tr></table>");
        }
        RenderNode::List { items } => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_spans(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        RenderNode::Spacer => out.push_str("<br />"),
        RenderNode::Paragraph { text } => {
            out.push_str("<p>");
            write_spans(out, text);
            out.push_str("</p>");
        }
    }
}

fn write_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Text(t) => out.push_str(&encode_text(t)),
            InlineSpan::Bold(t) => wrap(out, "strong", t),
            InlineSpan::Italic(t) => wrap(out, "em", t),
            InlineSpan::Code(t) => wrap(out, "code", t),
            InlineSpan::Link { label, url } => {
                let _ = write!(
                    out,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    encode_double_quoted_attribute(url),
                    encode_text(label)
                );
            }
        }
    }
}

fn wrap(out: &mut String, tag: &str, text: &str) {
    let _ = write!(out, "<{tag}>{}</{tag}>", encode_text(text));
}
