//! Layout engine micro-benchmarks
//!
//! Measures intrinsic sizing and pagination throughput for growing documents.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quire::{DocumentEngine, InlineRun, Line, Node, StyleDictionary, TextStyle};
use serde_json::{Value, json};
use std::hint::black_box;

/// A stack of paragraphs, each followed by a two-column block.
fn paragraphs_document(count: usize) -> Value {
    let children: Vec<Value> = (0..count)
        .map(|i| {
            json!([
                { "text": format!("Paragraph {} with a handful of words to measure", i), "margin": [0, 4] },
                { "columns": [format!("left {}", i), { "text": format!("right {}", i), "bold": true }] }
            ])
        })
        .collect();
    json!({ "stack": children })
}

/// A table with a header row and `rows` body rows of three cells.
fn table_document(rows: usize) -> Value {
    let mut body = vec![json!(["Name", "Quantity", "Price"])];
    body.extend((0..rows).map(|i| json!([format!("Item {}", i), i.to_string(), format!("{}.00", i * 3)])));
    json!({ "table": { "headerRows": 1, "widths": ["*", "auto", 60], "body": body } })
}

/// Nested ordered lists, `depth` levels deep with `width` items each.
fn nested_list_document(depth: usize, width: usize) -> Value {
    let mut list = json!({ "ol": (0..width).map(|i| format!("leaf {}", i)).collect::<Vec<_>>() });
    for _ in 0..depth {
        let mut items: Vec<Value> = (0..width).map(|i| json!(format!("item {}", i))).collect();
        items.push(list);
        list = json!({ "ol": items });
    }
    list
}

fn benchmark_measure_paragraphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_paragraphs");
    let engine = DocumentEngine::default();
    let styles = StyleDictionary::default();

    for count in [10, 100, 1000] {
        let node = Node::from_value(&paragraphs_document(count)).expect("valid document");
        group.bench_with_input(BenchmarkId::new("paragraphs", count), &node, |b, node| {
            b.iter(|| black_box(engine.measure(node, &styles).expect("measurement failed")))
        });
    }

    group.finish();
}

fn benchmark_measure_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_tables");
    let engine = DocumentEngine::default();
    let styles = StyleDictionary::default();

    for rows in [10, 100, 1000] {
        let json = table_document(rows).to_string();
        group.bench_with_input(BenchmarkId::new("rows", rows), &json, |b, json| {
            b.iter(|| black_box(engine.measure_json(json, &styles).expect("measurement failed")))
        });
    }

    group.finish();
}

fn benchmark_measure_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_nested_lists");
    let engine = DocumentEngine::default();
    let styles = StyleDictionary::default();

    for depth in [1, 4, 8] {
        let node = Node::from_value(&nested_list_document(depth, 10)).expect("valid document");
        group.bench_with_input(BenchmarkId::new("depth", depth), &node, |b, node| {
            b.iter(|| black_box(engine.measure(node, &styles).expect("measurement failed")))
        });
    }

    group.finish();
}

fn benchmark_paginate_with_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate_with_header");
    let engine = DocumentEngine::default();
    let line = |text: String| {
        Line::from_inlines(vec![InlineRun {
            text,
            width: 120.0,
            height: 14.0,
            font_size: 12.0,
            style: TextStyle::default(),
        }])
    };

    for rows in [100, 1000, 10000] {
        let lines: Vec<Line> = (0..rows).map(|i| line(format!("row {}", i))).collect();
        group.bench_with_input(BenchmarkId::new("rows", rows), &lines, |b, lines| {
            b.iter(|| {
                let mut pg = engine.paginator();
                pg.begin_unbreakable_block();
                pg.add_line(&line("header".to_string()), false).expect("header fits");
                let header = pg.unbreakable_block_to_repeatable().expect("block is open");
                pg.commit_unbreakable_block().expect("header commits");
                pg.push_to_repeatables(header);
                for l in lines {
                    pg.add_line(l, false).expect("row fits");
                }
                pg.pop_from_repeatables().expect("header was pushed");
                black_box(pg.finish().expect("balanced layout"))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_measure_paragraphs,
    benchmark_measure_tables,
    benchmark_measure_nested_lists,
    benchmark_paginate_with_header
);
criterion_main!(benches);
