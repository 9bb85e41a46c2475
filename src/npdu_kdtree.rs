//! C4 — NPDU + KDTree FPS: the window heuristic without relying on
//! index-order locality (`spec.md` §4.4).

use crate::dmin::{full_update, range_update, select_farthest};
use crate::kdtree::KdTree;
use crate::points::PointCloud;
use crate::start::Start;
use crate::validate::check_sample_count;
use crate::window::resolve_w;
use crate::Result;

/// Leaf capacity for the auxiliary kd-tree this variant builds purely to
/// answer "w nearest by index" queries — not user-configurable, since it's
/// an implementation detail of the window query rather than part of the
/// sampled result. `8` mirrors the small-cloud leaf size `spec.md` §4.6
/// suggests for the bucket variants (`h=3`).
const DEFAULT_LEAF_CAPACITY: usize = 8;

/// Same windowed heuristic as [`crate::sample_npdu`], but the window is the
/// `w` nearest points *by coordinate*, found via a kd-tree query, instead of
/// a slice of natural index order. Removes the locality assumption C2 makes
/// about input ordering.
pub fn sample_npdu_kdtree(
    points: &PointCloud,
    n_samples: usize,
    w: Option<usize>,
    start: Start,
) -> Result<Vec<u64>> {
    check_sample_count(points, n_samples)?;
    let seeds = start.resolve(points, n_samples)?;

    let n = points.len();
    let w = resolve_w(w, n, n_samples, n);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n_points = n,
        n_samples,
        w,
        variant = "npdu_kdtree",
        "starting sampling"
    );

    let tree = KdTree::build(points, DEFAULT_LEAF_CAPACITY);

    let mut dmin = vec![f32::INFINITY; n];
    let mut selected = vec![false; n];
    let mut result = Vec::with_capacity(n_samples);

    for &q in &seeds {
        full_update(points, &mut dmin, q);
        selected[q] = true;
        result.push(q as u64);
    }

    while result.len() < n_samples {
        let q = select_farthest(&dmin, &selected);

        range_update(points, &mut dmin, q, q, q);
        for neighbour in tree.nearest_n(points, points.point(q), w) {
            let idx = neighbour.index as usize;
            if neighbour.distance < dmin[idx] {
                dmin[idx] = neighbour.distance;
            }
        }

        selected[q] = true;
        result.push(q as u64);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(n_samples, variant = "npdu_kdtree", "finished sampling");

    Ok(result)
}
