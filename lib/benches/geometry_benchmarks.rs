//! Geometry benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use placer::geometry::{Point, Polygon};
use placer::placement::reduce_free_area;
use placer::triangulation::delaunay;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn contains_benchmark(c: &mut Criterion) {
    let circle = Polygon::circle(Point::new(0.0, 0.0), 10.0, 64);
    let inside = Point::new(3.0, 4.0);
    c.bench_function("polygon_contains_64_vertices", |b| {
        b.iter(|| black_box(&circle).contains(black_box(&inside)))
    });
}

fn reduce_free_area_benchmark(c: &mut Criterion) {
    let floor = Polygon::rectangle(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    let footprints: Vec<Polygon> = (0..10)
        .map(|i| {
            let offset = i as f64 * 9.0;
            Polygon::rectangle(
                Point::new(offset + 1.0, 40.0),
                Point::new(offset + 6.0, 60.0),
            )
        })
        .collect();
    c.bench_function("reduce_free_area_10_footprints", |b| {
        b.iter(|| reduce_free_area(black_box(&floor), black_box(&footprints)))
    });
}

fn delaunay_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(17);
    let points: Vec<Point> = (0..100)
        .map(|_| Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    c.bench_function("delaunay_100_points", |b| {
        b.iter(|| delaunay(black_box(&points)))
    });
}

fn triangulate_benchmark(c: &mut Criterion) {
    let circle = Polygon::circle(Point::new(0.0, 0.0), 10.0, 64);
    c.bench_function("triangulate_circle_64_vertices", |b| {
        b.iter(|| black_box(&circle).triangulate())
    });
}

criterion_group!(
    benches,
    contains_benchmark,
    reduce_free_area_benchmark,
    delaunay_benchmark,
    triangulate_benchmark
);
criterion_main!(benches);
