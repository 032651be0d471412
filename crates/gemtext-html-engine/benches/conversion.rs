use criterion::{Criterion, criterion_group, criterion_main};
use gemtext_html_engine::to_html;
mod common;

fn bench_mixed_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(10);

    let content = common::generate_gemtext_content(100);
    group.bench_function("mixed_document", |b| {
        b.iter(|| {
            let html = to_html(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });

    let headings = common::generate_heading_heavy_content(500);
    group.bench_function("heading_ids", |b| {
        b.iter(|| {
            let html = to_html(std::hint::black_box(&headings));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mixed_document);
criterion_main!(benches);
