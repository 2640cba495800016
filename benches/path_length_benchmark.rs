use criterion::{criterion_group, criterion_main, Criterion};
use sendero_sv::geodesy::path_length_km;
use sendero_sv::models::LatLng;
use sendero_sv::services::TrailCatalog;
use std::hint::black_box;

/// A zigzag track of `n` vertices starting near Los Planes de Renderos.
fn synthetic_track(n: usize) -> Vec<LatLng> {
    (0..n)
        .map(|i| {
            let step = i as f64 * 0.0001;
            LatLng {
                lat: 13.65 + step,
                lng: -89.18 + if i % 2 == 0 { step } else { -step / 2.0 },
            }
        })
        .collect()
}

fn benchmark_path_length(c: &mut Criterion) {
    let short = synthetic_track(50);
    let max = synthetic_track(5_000);

    let mut group = c.benchmark_group("path_length");

    group.bench_function("planner_waypoints", |b| {
        b.iter(|| path_length_km(black_box(&short)))
    });

    group.bench_function("max_stored_path", |b| {
        b.iter(|| path_length_km(black_box(&max)))
    });

    group.finish();
}

fn benchmark_catalog_load(c: &mut Criterion) {
    let json = std::fs::read_to_string("data/official_routes.geojson")
        .expect("Failed to read official routes");

    c.bench_function("catalog_load", |b| {
        b.iter(|| TrailCatalog::load_from_json(black_box(&json)))
    });
}

criterion_group!(benches, benchmark_path_length, benchmark_catalog_load);
criterion_main!(benches);
