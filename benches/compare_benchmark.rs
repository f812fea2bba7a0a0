//! Benchmarks for the format comparators.

use criterion::{criterion_group, criterion_main, Criterion};
use docdiff::{compare_json, compare_text, compare_xml, ComparisonOptions, TextMode};
use std::fmt::Write;
use std::hint::black_box;

fn json_document(items: usize, bump: usize) -> String {
    let entries: Vec<String> = (0..items)
        .map(|i| {
            let port = if i % bump == 0 { 8080 } else { 80 };
            format!(r#"{{"id": {i}, "host": "node-{i}.example.com", "port": {port}, "tags": ["a", "b"]}}"#)
        })
        .collect();
    format!(r#"{{"name": "cluster", "nodes": [{}]}}"#, entries.join(", "))
}

fn xml_document(items: usize, bump: usize) -> String {
    let mut out = String::from("<catalog>\n");
    for i in 0..items {
        let price = if i % bump == 0 { "9.99" } else { "19.99" };
        let _ = writeln!(
            out,
            "  <book id=\"b{i}\" lang=\"en\">\n    <title>Book {i}</title>\n    <price>{price}</price>\n  </book>"
        );
    }
    out.push_str("</catalog>");
    out
}

fn benchmark_json(c: &mut Criterion) {
    let left = json_document(200, usize::MAX);
    let right = json_document(200, 9);
    let strict = ComparisonOptions::default();
    let lenient = ComparisonOptions::lenient();

    c.bench_function("compare_json_strict_200", |b| {
        b.iter(|| compare_json(black_box(&left), black_box(&right), &strict));
    });
    c.bench_function("compare_json_lenient_200", |b| {
        b.iter(|| compare_json(black_box(&left), black_box(&right), &lenient));
    });
}

fn benchmark_xml(c: &mut Criterion) {
    let left = xml_document(100, usize::MAX);
    let right = xml_document(100, 7);
    let opts = ComparisonOptions::default().ignore_key_order(true);

    c.bench_function("compare_xml_100", |b| {
        b.iter(|| compare_xml(black_box(&left), black_box(&right), &opts));
    });
}

fn benchmark_text(c: &mut Criterion) {
    let left: String = (0..1000).map(|i| format!("line {i} text\n")).collect();
    let right: String = (0..1000)
        .map(|i| {
            if i % 11 == 0 {
                format!("line {i} changed text\n")
            } else {
                format!("line {i} text\n")
            }
        })
        .collect();
    let opts = ComparisonOptions::default();

    c.bench_function("compare_text_lines_1000", |b| {
        b.iter(|| compare_text(black_box(&left), black_box(&right), &opts, TextMode::Line));
    });
    c.bench_function("compare_text_words_1000", |b| {
        b.iter(|| compare_text(black_box(&left), black_box(&right), &opts, TextMode::Word));
    });
}

criterion_group!(benches, benchmark_json, benchmark_xml, benchmark_text);
criterion_main!(benches);
