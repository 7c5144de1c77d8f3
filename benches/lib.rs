//! # classmodel benchmarks
//!
//! Criterion benchmarks for the three hot paths.
//!
//! ## Groups
//! - `tokenize`: scanning a document into tokens
//! - `parse`: tokenizer thread plus recursive descent
//! - `format`: rendering a parsed document
//!
//! ## Usage
//! ```bash
//! cargo bench          # run everything
//! cargo bench parse    # only the parser group
//! ```

use classmodel::frontend::lexer::tokenize;
use classmodel::frontend::parser::parse_with_capacity;
use classmodel::{format, parse};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const FIXTURE: &str = include_str!("../tests/fixtures/collections.model");

/// A larger document made of many generated aspects
fn generated(aspects: usize) -> String {
    let mut source = String::from(
        "/*\nNotice.\n*/\n\n/*\nPackage generated.\n*/\npackage generated\n\n// INTERFACES\n\n// Aspects\n",
    );
    for index in 0..aspects {
        source.push_str(&format!(
            "\n/*\nAspect{index} is generated.\n*/\ntype Aspect{index}[V any] interface {{\n\t// Methods\n\tGetValue(index int) V\n\tSetValue(index int, value V)\n}}\n",
        ));
    }
    source
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize/fixture", |b| {
        b.iter(|| tokenize(black_box(FIXTURE)))
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("fixture", |b| b.iter(|| parse(black_box(FIXTURE))));

    let large = generated(200);
    for capacity in [1, 16, 256] {
        group.bench_with_input(
            BenchmarkId::new("queue_capacity", capacity),
            &capacity,
            |b, &capacity| b.iter(|| parse_with_capacity(black_box(&large), capacity)),
        );
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let document = match parse(FIXTURE) {
        Ok(document) => document,
        Err(err) => panic!("fixture does not parse: {}", err),
    };
    c.bench_function("format/fixture", |b| b.iter(|| format(black_box(&document))));
}

criterion_group!(tokenizer, bench_tokenize);
criterion_group!(parser, bench_parse);
criterion_group!(formatter, bench_format);

criterion_main!(tokenizer, parser, formatter);
