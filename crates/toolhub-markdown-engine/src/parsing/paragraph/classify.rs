use super::kinds::{BlockQuote, Heading, ListItem, TableRow};

/// What a single paragraph line is, with its marker stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    ListItem(&'a str),
    Heading { level: u8, text: &'a str },
    BlockQuote(&'a str),
    TableRow(Vec<&'a str>),
    Blank,
    Paragraph(&'a str),
}

/// A classification rule: a predicate and the constructor applied when it
/// holds.
pub struct LineRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub build: for<'a> fn(&'a str) -> LineKind<'a>,
}

/// Classification rules in priority order. The first matching rule wins;
/// the last rule matches everything.
pub static LINE_RULES: [LineRule; 6] = [
    LineRule {
        name: "list_item",
        matches: is_list_item,
        build: build_list_item,
    },
    LineRule {
        name: "heading",
        matches: is_heading,
        build: build_heading,
    },
    LineRule {
        name: "block_quote",
        matches: is_block_quote,
        build: build_block_quote,
    },
    LineRule {
        name: "table_row",
        matches: is_table_row,
        build: build_table_row,
    },
    LineRule {
        name: "blank",
        matches: is_blank,
        build: build_blank,
    },
    LineRule {
        name: "paragraph",
        matches: always,
        build: build_paragraph,
    },
];

/// Classifies one line by walking [`LINE_RULES`] in order.
pub fn classify_line(line: &str) -> LineKind<'_> {
    match LINE_RULES.iter().find(|rule| (rule.matches)(line)) {
        Some(rule) => (rule.build)(line),
        None => LineKind::Paragraph(line),
    }
}

/// Name of the rule that claims `line`.
pub fn rule_for(line: &str) -> &'static str {
    LINE_RULES
        .iter()
        .find(|rule| (rule.matches)(line))
        .map_or("paragraph", |rule| rule.name)
}

fn is_list_item(line: &str) -> bool {
    ListItem::strip(line).is_some()
}

fn build_list_item(line: &str) -> LineKind<'_> {
    LineKind::ListItem(ListItem::strip(line).unwrap_or(line))
}

fn is_heading(line: &str) -> bool {
    Heading::strip(line).is_some()
}

fn build_heading(line: &str) -> LineKind<'_> {
    match Heading::strip(line) {
        Some((level, text)) => LineKind::Heading { level, text },
        None => LineKind::Paragraph(line),
    }
}

fn is_block_quote(line: &str) -> bool {
    BlockQuote::strip(line).is_some()
}

fn build_block_quote(line: &str) -> LineKind<'_> {
    LineKind::BlockQuote(BlockQuote::strip(line).unwrap_or(line))
}

fn is_table_row(line: &str) -> bool {
    TableRow::cells(line).is_some()
}

fn build_table_row(line: &str) -> LineKind<'_> {
    match TableRow::cells(line) {
        Some(cells) => LineKind::TableRow(cells),
        None => LineKind::Paragraph(line),
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn build_blank(_line: &str) -> LineKind<'_> {
    LineKind::Blank
}

fn always(_line: &str) -> bool {
    true
}

fn build_paragraph(line: &str) -> LineKind<'_> {
    LineKind::Paragraph(line)
}
