//! Performance benchmarks for catalog queries.
//!
//! Run with: cargo bench --bench catalog_benchmark
//!
//! Covers the paths a keystroke in the browser goes through:
//! 1. Dataset indexing (search key precomputation)
//! 2. Query evaluation with and without free text
//! 3. Snapshot diffing

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vehicle_catalog::catalog::{run_query, FilterState, SortConfig, SortField, SortOrder};
use vehicle_catalog::diff::diff_datasets;
use vehicle_catalog::model::{Dataset, SupportType, VehicleRecord};

const MAKES: [&str; 8] = [
    "Acura", "Honda", "Hyundai", "Kia", "Lexus", "Škoda", "Toyota", "Volkswagen",
];

/// Generate records with the specified count.
fn generate_records(count: usize) -> Vec<VehicleRecord> {
    (0..count)
        .map(|i| {
            let make = MAKES[i % MAKES.len()];
            let model = format!("Model {}", i % 37);
            let start = 2015 + (i % 8);
            let mut record =
                VehicleRecord::new(format!("{make} {model} {start}-{i}"), make, model);
            record.years = format!("{start}-{:02}", (start + 2) % 100);
            record.package = if i % 3 == 0 { "All" } else { "Adaptive Cruise Control" }.to_string();
            record.support_type = SupportType::ALL[i % SupportType::ALL.len()].clone();
            record.wheelbase = Some(2.5 + (i % 10) as f64 / 10.0);
            record
        })
        .collect()
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_indexing");
    for size in &[300usize, 3_000] {
        let records = generate_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(Dataset::from_records(records.clone())))
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let sort = SortConfig::new(SortField::Year, SortOrder::Desc);
    for size in &[300usize, 3_000] {
        let Ok(dataset) = Dataset::from_records(generate_records(*size)) else {
            continue;
        };
        let filtered = FilterState::new()
            .with_make("Toyota")
            .with_support(SupportType::Upstream);
        let searched = FilterState::new().with_query("hon 2019");

        group.bench_with_input(BenchmarkId::new("filters", size), size, |b, _| {
            b.iter(|| black_box(run_query(&dataset, &filtered, &sort).len()))
        });
        group.bench_with_input(BenchmarkId::new("search", size), size, |b, _| {
            b.iter(|| black_box(run_query(&dataset, &searched, &sort).len()))
        });
    }
    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut records = generate_records(3_000);
    let Ok(old) = Dataset::from_records(records.clone()) else {
        return;
    };
    for record in records.iter_mut().step_by(10) {
        record.steer_ratio = Some(15.0);
    }
    let Ok(new) = Dataset::from_records(records) else {
        return;
    };
    c.bench_function("diff_3000_records", |b| {
        b.iter(|| black_box(diff_datasets(&old, &new).summary.changed))
    });
}

criterion_group!(benches, bench_indexing, bench_queries, bench_diff);
criterion_main!(benches);
