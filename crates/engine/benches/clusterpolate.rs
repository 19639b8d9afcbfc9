//! Benchmarks for grid clusterpolation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use clusterpolate::{
    clusterpolate, ClusterpolateParams, GridSpec, KdTree, KernelConfig, ProcessingMode,
    SamplePoint,
};

fn create_points(n: usize) -> (Vec<(f64, f64)>, Vec<f64>) {
    // Deterministic clustered layout over a 100×100 domain
    let mut points = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        let cx = ((i % 5) * 20 + 10) as f64;
        let cy = ((i % 3) * 30 + 20) as f64;
        let dx = ((i * 7 + 13) % 100) as f64 / 10.0 - 5.0;
        let dy = ((i * 11 + 37) % 100) as f64 / 10.0 - 5.0;
        points.push((cx + dx, cy + dy));
        values.push((cx - cy) / 10.0 + dx * 0.1);
    }
    (points, values)
}

fn bench_kdtree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");

    for n in [1_000, 10_000, 100_000].iter() {
        let (points, values) = create_points(*n);
        let samples: Vec<SamplePoint> = points
            .iter()
            .zip(&values)
            .map(|(&(x, y), &v)| SamplePoint::new(x, y, v))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| KdTree::build(black_box(&samples)))
        });
    }

    group.finish();
}

fn bench_grid_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_evaluation");
    let (points, values) = create_points(5_000);

    for size in [64, 128, 256].iter() {
        let params = ClusterpolateParams::new(
            GridSpec::new(*size, *size, (0.0, 0.0), (100.0, 100.0)),
            KernelConfig::bump(5.0),
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| clusterpolate(black_box(&points), black_box(&values), &params).unwrap())
        });
    }

    group.finish();
}

fn bench_processing_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing_mode");
    let (points, values) = create_points(5_000);
    let grid = GridSpec::new(256, 256, (0.0, 0.0), (100.0, 100.0));

    for (label, mode) in [
        ("sequential", ProcessingMode::Sequential),
        ("parallel", ProcessingMode::Parallel),
    ] {
        let mut params = ClusterpolateParams::new(grid, KernelConfig::bump(5.0));
        params.mode = mode;

        group.bench_with_input(BenchmarkId::from_parameter(label), &params, |b, params| {
            b.iter(|| clusterpolate(black_box(&points), black_box(&values), params).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kdtree_build,
    bench_grid_evaluation,
    bench_processing_modes
);
criterion_main!(benches);
