use criterion::{Criterion, criterion_group, criterion_main};
use linemark_engine::{Markdown, PlainTextRenderer};
mod common;

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_document(100);
    group.bench_function("html", |b| {
        let mut md = Markdown::new();
        b.iter(|| std::hint::black_box(md.load(std::hint::black_box(&content))));
    });
    group.bench_function("plain_text", |b| {
        let mut md = Markdown::with_renderer(PlainTextRenderer);
        b.iter(|| std::hint::black_box(md.load(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let content = common::generate_inline_heavy(500);
    group.bench_function("rewrite", |b| {
        let mut md = Markdown::new();
        b.iter(|| std::hint::black_box(md.load(std::hint::black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_inline);
criterion_main!(benches);
