//! Benchmarks for object parsing.
//!
//! Targets `parse_object()` - the single entry point composing the byte
//! classifier, token scanner, and scalar/string/name decoders.
//!
//! Benchmark groups:
//! - `parse_scalars`: flat runs of numbers, names, and strings
//! - `parse_composites`: arrays and dictionaries at various sizes

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use palermo_core::parse_object;

/// Generate a flat array of n mixed scalar elements.
fn generate_scalar_array(n: usize) -> Vec<u8> {
    let templates: &[&[u8]] = &[
        b"12 ",
        b"-3.62 ",
        b"/Name ",
        b"(literal string) ",
        b"<48454C4C4F> ",
        b"true ",
        b"null ",
    ];
    let mut data = Vec::with_capacity(n * 12 + 2);
    data.push(b'[');
    for i in 0..n {
        data.extend_from_slice(templates[i % templates.len()]);
    }
    data.push(b']');
    data
}

/// Generate a dictionary with n entries, page-tree shaped values.
fn generate_dict(n: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(n * 24 + 4);
    data.extend_from_slice(b"<< /Type /Pages ");
    for i in 0..n {
        data.extend_from_slice(format!("/K{} [{} {}.5 (v)] ", i, i, i).as_bytes());
    }
    data.extend_from_slice(b">>");
    data
}

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scalars");
    for n in [64usize, 1024] {
        let data = generate_scalar_array(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| parse_object(black_box(data), 0).unwrap());
        });
    }
    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_composites");
    for n in [16usize, 256] {
        let data = generate_dict(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| parse_object(black_box(data), 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scalars, bench_composites);
criterion_main!(benches);
