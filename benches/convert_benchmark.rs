//! Benchmarks for endeck conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the full pipeline at various document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use endeck::{Block, Cell, ConvertOptions, Document, Inline, Table};

/// Creates a synthetic document with the given number of sections.
///
/// Each section has a heading, a paragraph with mixed styling, a bullet
/// list, and every fourth section a table, so all converter paths are hit.
fn create_test_document(section_count: usize) -> Document {
    let mut blocks = Vec::new();

    for i in 0..section_count {
        blocks.push(Block::heading(2, format!("section-{}", i), format!("Section {}", i)));
        blocks.push(Block::Paragraph {
            content: vec![
                Inline::str("Some "),
                Inline::emph("styled"),
                Inline::str(" text with a "),
                Inline::link("link", "https://example.com"),
                Inline::str(" and a footnote"),
                Inline::note(vec![Block::text("footnote body")]),
            ],
        });
        blocks.push(Block::BulletList {
            items: vec![
                vec![Block::text("first point")],
                vec![Block::text("second point"), Block::text("continued")],
            ],
        });
        if i % 4 == 0 {
            blocks.push(Block::Table(Table {
                caption: vec![Inline::str("measurements")],
                header: vec![Cell::with_text("name"), Cell::with_text("value")],
                rows: vec![
                    vec![Cell::with_text("alpha"), Cell::with_text("1")],
                    vec![Cell::with_text("beta"), Cell::with_text("2")],
                ],
            }));
        }
    }

    Document::from_blocks(blocks)
}

/// Benchmark full conversion at various document sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for section_count in [10, 100, 500].iter() {
        let doc = create_test_document(*section_count);
        let options = ConvertOptions::new().with_slide_level(2).with_toc(true);

        group.bench_with_input(BenchmarkId::new("sections", section_count), &doc, |b, doc| {
            b.iter(|| {
                let _ = endeck::convert(black_box(doc), &options);
            });
        });
    }

    group.finish();
}

/// Benchmark JSON serialization of the produced presentation.
fn bench_json_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_serialization");

    for section_count in [10, 100].iter() {
        let doc = create_test_document(*section_count);
        let options = ConvertOptions::new().with_slide_level(2);
        let pres = endeck::to_presentation(&doc, &options).unwrap();

        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &pres,
            |b, pres| {
                b.iter(|| {
                    let _ = black_box(pres).to_json_compact();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_json_serialization);
criterion_main!(benches);
