use pretty_assertions::assert_eq;
use proptest::prelude::*;
use toolhub_markdown_engine::{
    Block, BlockKind, InlineSpan, RenderNode, format_inline, parse_blocks, parse_str, render,
    render_paragraph, to_html, to_plain_text,
};

fn code(language: &str, text: &str) -> (BlockKind, String) {
    (
        BlockKind::Code {
            language: language.into(),
        },
        text.into(),
    )
}

fn para(text: &str) -> (BlockKind, String) {
    (BlockKind::Paragraph, text.into())
}

fn shapes(blocks: &[Block]) -> Vec<(BlockKind, String)> {
    blocks
        .iter()
        .map(|b| (b.kind.clone(), b.text.clone()))
        .collect()
}

#[test]
fn fenced_block_between_paragraphs() {
    let blocks = parse_blocks("a\n```js\nconsole.log(1)\n```\nb");
    assert_eq!(
        shapes(&blocks),
        vec![para("a"), code("js", "console.log(1)"), para("b")]
    );
}

#[test]
fn unterminated_fence_is_code() {
    let doc = parse_str("```py\nprint(1)");
    assert_eq!(shapes(&doc.blocks), vec![code("py", "print(1)")]);
}

#[test]
fn joined_block_text_reproduces_input_without_fences() {
    let input = "intro\n- item\n```rs\nfn main() {}\n\nlet x = 1;\n```\n## after\n|a|b|";
    let doc = parse_str(input);

    let joined = doc
        .blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let expected = input
        .lines()
        .filter(|l| !l.starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(joined, expected);
}

#[test]
fn list_items_group() {
    assert_eq!(
        render_paragraph("- a\n- b\nc"),
        vec![
            RenderNode::List {
                items: vec![vec![InlineSpan::text("a")], vec![InlineSpan::text("b")]]
            },
            RenderNode::Paragraph {
                text: vec![InlineSpan::text("c")]
            },
        ]
    );
}

#[test]
fn inline_kinds_in_order() {
    let spans = format_inline("**bold** and *italic* and `code` and [x](https://e.com)");
    assert_eq!(
        spans,
        vec![
            InlineSpan::Bold("bold".into()),
            InlineSpan::text(" and "),
            InlineSpan::Italic("italic".into()),
            InlineSpan::text(" and "),
            InlineSpan::Code("code".into()),
            InlineSpan::text(" and "),
            InlineSpan::Link {
                label: "x".into(),
                url: "https://e.com".into(),
            },
        ]
    );
}

#[test]
fn each_blank_line_is_one_spacer() {
    let nodes = render_paragraph("a\n\n \nb");
    let spacers = nodes
        .iter()
        .filter(|n| matches!(n, RenderNode::Spacer))
        .count();
    assert_eq!(spacers, 2);
    assert_eq!(nodes.len(), 4);
}

proptest! {
    /// Text without fences is one paragraph block holding the input minus
    /// one trailing newline, or nothing at all when it is blank.
    #[test]
    fn fence_free_input_is_one_paragraph(input in "[a-z #>|*`_\\-\n ]{0,80}") {
        prop_assume!(!input.contains("```"));
        let doc = parse_str(&input);

        if input.trim().is_empty() {
            prop_assert!(doc.blocks.is_empty());
        } else {
            prop_assert_eq!(doc.blocks.len(), 1);
            prop_assert_eq!(&doc.blocks[0].kind, &BlockKind::Paragraph);
            let expected = input.strip_suffix('\n').unwrap_or(input.as_str());
            prop_assert_eq!(doc.blocks[0].text.as_str(), expected);
        }
    }

    /// Rendering never panics and every output surface accepts the result.
    #[test]
    fn rendering_is_total(input in any::<String>()) {
        let doc = render(&input);
        let _ = to_html(&doc);
        let _ = to_plain_text(&doc);
    }

    /// Fence-heavy input keeps block spans ordered and in bounds.
    #[test]
    fn block_spans_stay_ordered(input in "(```[a-z]{0,3}\n|[a-z ]{0,8}\n|\n){0,20}") {
        let rope = xi_rope::Rope::from(input.as_str());
        let doc = toolhub_markdown_engine::parse_document(&rope);
        toolhub_markdown_engine::parsing::snapshot::invariants(&rope, &doc.blocks);
    }

    /// Formatting only rearranges text: the visible text never gains characters.
    #[test]
    fn inline_visible_text_is_not_longer(line in "[a-z*`\\[\\]():/. ]{0,60}") {
        let spans = format_inline(&line);
        let visible: usize = spans.iter().map(|s| s.visible().len()).sum();
        prop_assert!(visible <= line.len());
    }
}
