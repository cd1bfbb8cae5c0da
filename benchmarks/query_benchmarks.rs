#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: qsparams vs the url crate's `form_urlencoded`
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qsparams::QueryParams;
use url::form_urlencoded;

const SIMPLE: &str = "name=pxy&version=1.0.0";
const ENCODED: &str = "?q=rust+url+parser&lang=en%2Dus&tags=a&tags=b&tags=c&emoji=%F0%9F%A6%80&empty=&flag";

/// Build a long query string with repeated names
fn long_query() -> String {
    (0..200)
        .map(|i| format!("key{}=value+{i}%21", i % 17))
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("qsparams", |b| {
        b.iter(|| QueryParams::parse(black_box(SIMPLE)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(SIMPLE.as_bytes())).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_encoded(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encoded");
    let input = ENCODED.strip_prefix('?').unwrap();

    group.bench_function("qsparams", |b| {
        b.iter(|| QueryParams::parse(black_box(ENCODED)));
    });

    group.bench_function("qsparams_strict", |b| {
        b.iter(|| QueryParams::try_parse(black_box(ENCODED)).unwrap());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(input.as_bytes())).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_long(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_long");
    let input = long_query();

    group.bench_function("qsparams", |b| {
        b.iter(|| QueryParams::parse(black_box(&input)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(input.as_bytes())).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = QueryParams::parse(ENCODED);
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    group.bench_function("qsparams", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let params = QueryParams::parse(&long_query());

    c.bench_function("sort_long", |b| {
        b.iter(|| {
            let mut params = params.clone();
            params.sort();
            params
        });
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_encoded,
    bench_parse_long,
    bench_serialize,
    bench_sort
);

criterion_main!(benches);
