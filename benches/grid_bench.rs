//! Benchmark voxel grid and containment performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kshetra_scan::{Boundary, Point, VoxelGrid};

/// Serpentine sample path over a square plot.
fn sample_path(n: usize, extent: f32) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            // Sweeps back and forth across the plot
            let x = (t * 37.0).sin() * 0.5 * extent + 0.5 * extent;
            let y = t * extent;
            (x, y)
        })
        .collect()
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("voxel_paint");

    for n in [1_000, 10_000, 100_000].iter() {
        let samples = sample_path(*n, 20.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| {
                let mut grid = VoxelGrid::new(0.05);
                for &(x, y) in &samples {
                    black_box(grid.paint(x, y));
                }
                black_box(grid.area_m2())
            })
        });
    }

    group.finish();
}

fn bench_repaint_saturated(c: &mut Criterion) {
    // Measures the steady-state cost once most cells are visited
    let samples = sample_path(100_000, 20.0);
    let mut grid = VoxelGrid::new(0.05);
    for &(x, y) in &samples {
        grid.paint(x, y);
    }

    c.bench_function("voxel_repaint_saturated", |b| {
        b.iter(|| {
            for &(x, y) in &samples {
                black_box(grid.paint(x, y));
            }
        })
    });
}

fn bench_containment(c: &mut Criterion) {
    // A 16-vertex polygon, queries mixing inside/outside points
    let vertices: Vec<Point> = (0..16)
        .map(|i| {
            let angle = i as f32 / 16.0 * std::f32::consts::TAU;
            Point::new(10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect();
    let boundary = Boundary::new(vertices).unwrap();
    let queries = sample_path(1_000, 40.0);

    c.bench_function("boundary_contains_1k", |b| {
        b.iter(|| {
            let mut inside = 0usize;
            for &(x, y) in &queries {
                if boundary.contains(x - 20.0, y - 20.0) {
                    inside += 1;
                }
            }
            black_box(inside)
        })
    });
}

criterion_group!(benches, bench_paint, bench_repaint_saturated, bench_containment);
criterion_main!(benches);
