use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use fpsample::{
    sample_bucket_kdline, sample_bucket_kdtree, sample_npdu, sample_npdu_kdtree, sample_vanilla,
    PointCloud, Start,
};

const DIM: usize = 3;

fn random_cloud(n_points: usize, seed: u64) -> Vec<f32> {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let dist = Uniform::new(0.0f32, 1.0f32).unwrap();
    (0..n_points * DIM).map(|_| dist.sample(&mut rng)).collect()
}

fn bench_variant(c: &mut Criterion, name: &str, n_points: usize, n_samples: usize) {
    let mut group = c.benchmark_group(name);
    let data = random_cloud(n_points, 42);
    let points = PointCloud::new(&data, n_points, DIM).unwrap();

    group.bench_with_input(BenchmarkId::new("vanilla", n_points), &points, |b, points| {
        b.iter(|| black_box(sample_vanilla(points, n_samples, Start::Single(0)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("npdu", n_points), &points, |b, points| {
        b.iter(|| black_box(sample_npdu(points, n_samples, None, Start::Single(0)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("npdu_kdtree", n_points), &points, |b, points| {
        b.iter(|| black_box(sample_npdu_kdtree(points, n_samples, None, Start::Single(0)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("bucket_kdtree", n_points), &points, |b, points| {
        b.iter(|| black_box(sample_bucket_kdtree(points, n_samples, Start::Single(0)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("bucket_kdline_h5", n_points), &points, |b, points| {
        b.iter(|| black_box(sample_bucket_kdline(points, n_samples, 5, Start::Single(0)).unwrap()));
    });

    group.finish();
}

fn sampling_benchmarks(c: &mut Criterion) {
    bench_variant(c, "4k of 1024", 4096, 1024);
    bench_variant(c, "50k of 4096", 50_000, 4096);
}

criterion_group!(benches, sampling_benchmarks);
criterion_main!(benches);
