use criterion::{Criterion, criterion_group, criterion_main};
use toolhub_markdown_engine::{format_inline, parse_str, render, to_html};
mod common;

fn bench_parse_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let content = common::generate_model_reply(100);
    group.bench_function("parse_blocks", |b| {
        b.iter(|| std::hint::black_box(parse_str(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(20);

    let content = common::generate_model_reply(100);
    group.bench_function("render_document", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&content))));
    });

    let doc = render(&content);
    group.bench_function("to_html", |b| {
        b.iter(|| std::hint::black_box(to_html(std::hint::black_box(&doc))));
    });

    let line = common::generate_long_line(200);
    group.bench_function("format_inline_long_line", |b| {
        b.iter(|| std::hint::black_box(format_inline(std::hint::black_box(&line))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_blocks, bench_render);
criterion_main!(benches);
