use toolhub_markdown_engine::parsing::{parse_document, snapshot};

#[test]
fn fixture_model_reply() {
    assert_fixture("model_reply");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

#[test]
fn fixture_heading_precedence() {
    assert_fixture("heading_precedence");
}

#[test]
fn fixture_blank_lines() {
    assert_fixture("blank_lines");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &doc.blocks);

    let snap = snapshot::normalize(&doc.blocks);
    insta::assert_json_snapshot!(name, snap);
}

/// Slicing the rope with a block span gives back the block's source lines.
#[test]
fn block_spans_slice_source_lines() {
    let md = "intro\n```js\nx()\n```\noutro";
    let rope = xi_rope::Rope::from(md);

    let doc = parse_document(&rope);
    let slices: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| rope.slice_to_cow(b.span.start..b.span.end).into_owned())
        .collect();

    assert_eq!(slices, vec!["intro\n", "```js\nx()\n```\n", "outro"]);
}

/// Code blocks are raw zones: markdown inside them is not rendered.
#[test]
fn code_blocks_suppress_paragraph_rendering() {
    use toolhub_markdown_engine::parsing::render_nodes_for_block;

    let rope = xi_rope::Rope::from("```md\n# heading\n**bold**\n```");
    let doc = parse_document(&rope);

    assert_eq!(doc.blocks.len(), 1);
    assert!(doc.blocks[0].is_code());
    assert!(render_nodes_for_block(&doc.blocks[0]).is_empty());
}
