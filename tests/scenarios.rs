//! The literal, deterministic scenarios from `spec.md` §8 ("Concrete
//! scenarios"), run against every variant.

use fpsample::{
    sample_bucket_kdline, sample_bucket_kdtree, sample_npdu, sample_npdu_kdtree, sample_vanilla,
    PointCloud, Start,
};

/// Smallest `h` with `2^h <= n_points` and `h >= 1`, for exercising the
/// kdline variant against these small, hand-picked point clouds.
fn smallest_valid_h(n_points: usize) -> u32 {
    let mut h = 1u32;
    while (1usize << (h + 1)) <= n_points {
        h += 1;
    }
    h
}

fn all_variants(points: &PointCloud, n_samples: usize, start: Start) -> Vec<(&'static str, Vec<u64>)> {
    let h = smallest_valid_h(points.len());
    vec![
        (
            "vanilla",
            sample_vanilla(points, n_samples, start.clone()).unwrap(),
        ),
        (
            "npdu",
            sample_npdu(points, n_samples, None, start.clone()).unwrap(),
        ),
        (
            "npdu_kdtree",
            sample_npdu_kdtree(points, n_samples, None, start.clone()).unwrap(),
        ),
        (
            "bucket_kdtree",
            sample_bucket_kdtree(points, n_samples, start.clone()).unwrap(),
        ),
        (
            "bucket_kdline",
            sample_bucket_kdline(points, n_samples, h, start).unwrap(),
        ),
    ]
}

#[test]
fn s1_unit_square_corners() {
    let data = [0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let points = PointCloud::new(&data, 4, 2).unwrap();
    for (variant, out) in all_variants(&points, 4, Start::Single(0)) {
        assert_eq!(out, vec![0, 3, 1, 2], "variant {variant} mismatched S1");
    }
}

#[test]
fn s2_collinear() {
    let data = [0.0f32, 1.0, 2.0, 3.0, 4.0];
    let points = PointCloud::new(&data, 5, 1).unwrap();
    for (variant, out) in all_variants(&points, 3, Start::Single(0)) {
        assert_eq!(out, vec![0, 4, 2], "variant {variant} mismatched S2");
    }
}

#[test]
fn s3_start_list() {
    let data = [0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let points = PointCloud::new(&data, 4, 2).unwrap();
    for (variant, out) in all_variants(&points, 3, Start::Multi(vec![2, 1])) {
        assert_eq!(out, vec![2, 1, 3], "variant {variant} mismatched S3");
    }
}

#[test]
fn s5_m_equals_n_is_a_permutation_starting_at_zero() {
    let mut data = Vec::new();
    for i in 0..50u32 {
        data.push(i as f32);
        data.push((i * 7 % 13) as f32);
    }
    let points = PointCloud::new(&data, 50, 2).unwrap();
    for (variant, out) in all_variants(&points, 50, Start::Single(0)) {
        assert_eq!(out[0], 0, "variant {variant} must start at 0");
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(
            sorted,
            (0..50u64).collect::<Vec<_>>(),
            "variant {variant} is not a permutation of [0, N)"
        );
    }
}

#[test]
fn s6_degenerate_coincident_points() {
    let data = vec![0.0f32; 30]; // 10 points x 3 dims, all (0, 0, 0)
    let points = PointCloud::new(&data, 10, 3).unwrap();
    for (variant, out) in all_variants(&points, 5, Start::Single(0)) {
        assert_eq!(out, vec![0, 1, 2, 3, 4], "variant {variant} mismatched S6");
    }
}
