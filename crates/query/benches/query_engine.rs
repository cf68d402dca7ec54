//! Benchmarks for the query engine
//!
//! Run with: cargo bench --package query

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Dataset;
use query::MovieQuery;
use std::path::Path;
use std::sync::Arc;

fn load_test_data() -> MovieQuery {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/movies.json");
    let dataset = Dataset::load_from_file(&path).expect("Failed to load test data");
    MovieQuery::new(Arc::new(dataset))
}

fn bench_fetch_by_title(c: &mut Criterion) {
    let query = load_test_data();

    c.bench_function("fetch_by_title", |b| {
        b.iter(|| {
            let movie = query.fetch_by_title(black_box("Lord of the Rings: The Two Towers"));
            black_box(movie.is_some())
        })
    });
}

fn bench_fetch_by_director(c: &mut Criterion) {
    let query = load_test_data();

    c.bench_function("fetch_by_director", |b| {
        b.iter(|| {
            let movies = query.fetch_by_director(black_box("Peter Jackson"));
            black_box(movies.len())
        })
    });
}

fn bench_fetch_by_rating(c: &mut Criterion) {
    let query = load_test_data();

    c.bench_function("fetch_by_rating", |b| {
        b.iter(|| {
            let movies = query
                .fetch_by_rating(black_box("moreThanOrEqual"), black_box(8.0))
                .unwrap();
            black_box(movies.len())
        })
    });
}

criterion_group!(
    benches,
    bench_fetch_by_title,
    bench_fetch_by_director,
    bench_fetch_by_rating
);
criterion_main!(benches);
