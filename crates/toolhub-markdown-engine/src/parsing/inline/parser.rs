use regex::{Captures, Regex};

use super::{
    kinds::{Bold, CodeSpan, Italic, Link},
    types::InlineSpan,
};

/// One global replace over the plain text left by earlier passes.
struct Pass {
    pattern: fn() -> &'static Regex,
    build: fn(&Captures<'_>) -> InlineSpan,
}

/// Pass order is fixed: link, bold, italic, inline code.
const PASSES: [Pass; 4] = [
    Pass {
        pattern: Link::pattern,
        build: Link::build,
    },
    Pass {
        pattern: Bold::pattern,
        build: Bold::build,
    },
    Pass {
        pattern: Italic::pattern,
        build: Italic::build,
    },
    Pass {
        pattern: CodeSpan::pattern,
        build: CodeSpan::build,
    },
];

/// Formats one line of text into a sequence of [`InlineSpan`]s.
///
/// Each pass only scans `Text` spans produced so far, so a later pass never
/// re-matches markup produced by an earlier one: `**a *b* c**` is a single
/// bold span whose inner asterisks stay literal.
///
/// # Returns
/// Spans covering the whole input in order; empty text is dropped, so an
/// empty line yields no spans.
pub fn format_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::text(line)];
    for pass in &PASSES {
        spans = apply_pass(spans, pass);
    }
    spans.retain(|s| !matches!(s, InlineSpan::Text(t) if t.is_empty()));
    spans
}

fn apply_pass(spans: Vec<InlineSpan>, pass: &Pass) -> Vec<InlineSpan> {
    let re = (pass.pattern)();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut last = 0;
        for caps in re.captures_iter(&text) {
            let Some(m) = caps.get(0) else { continue };
            push_text(&mut out, &text[last..m.start()]);
            out.push((pass.build)(&caps));
            last = m.end();
        }

        if last == 0 {
            out.push(InlineSpan::Text(text));
        } else {
            push_text(&mut out, &text[last..]);
        }
    }
    out
}

fn push_text(out: &mut Vec<InlineSpan>, s: &str) {
    if !s.is_empty() {
        out.push(InlineSpan::text(s));
    }
}
