//! Recursive median-split tree construction (`spec.md` §4.5).
//!
//! Grounded on the teacher crate's `construction.rs` recursion shape
//! (split the id range in place, recurse on each half) combined with
//! captree's `recur_sort_points` use of `select_nth_unstable_by` for the
//! partition step, here keyed on `(coordinate, point_id)` so that equal
//! coordinates still produce a fully deterministic split.

use crate::distance::extend_bounds;
use crate::points::PointCloud;

use super::node::{is_stem, leaf_id_of, node_id_of_leaf, LeafNode, StemNode};
use super::KdTree;

pub(super) fn build(points: &PointCloud, leaf_capacity: usize) -> KdTree {
    let n = points.len();
    let mut order: Vec<u32> = (0..n as u32).collect();
    let mut stems = Vec::new();
    let mut leaves = Vec::new();

    let root = recur(points, leaf_capacity, &mut order, 0, &mut stems, &mut leaves);

    KdTree {
        stems,
        leaves,
        order,
        root,
        leaf_capacity,
    }
}

/// Builds the subtree over `slice` (a contiguous run of the top-level
/// `order` permutation starting at `global_start`), returning its node id.
fn recur(
    points: &PointCloud,
    leaf_capacity: usize,
    slice: &mut [u32],
    global_start: usize,
    stems: &mut Vec<StemNode>,
    leaves: &mut Vec<LeafNode>,
) -> u32 {
    if slice.len() <= leaf_capacity {
        let (min_bound, max_bound) = bbox_of(points, slice);
        let leaf_idx = leaves.len();
        leaves.push(LeafNode {
            min_bound,
            max_bound,
            start: global_start as u32,
            len: slice.len() as u32,
        });
        return node_id_of_leaf(leaf_idx);
    }

    let axis = widest_axis(points, slice);
    let mid = slice.len() / 2;

    slice.select_nth_unstable_by(mid, |&a, &b| {
        let ca = points.point(a as usize)[axis];
        let cb = points.point(b as usize)[axis];
        ca.partial_cmp(&cb).unwrap().then(a.cmp(&b))
    });

    let (left_slice, right_slice) = slice.split_at_mut(mid);
    let left = recur(points, leaf_capacity, left_slice, global_start, stems, leaves);
    let right = recur(
        points,
        leaf_capacity,
        right_slice,
        global_start + mid,
        stems,
        leaves,
    );

    let (left_lo, left_hi) = bounds_of(left, stems, leaves);
    let (right_lo, right_hi) = bounds_of(right, stems, leaves);
    let dim = points.dim();
    let mut min_bound = left_lo.to_vec();
    let mut max_bound = left_hi.to_vec();
    for d in 0..dim {
        if right_lo[d] < min_bound[d] {
            min_bound[d] = right_lo[d];
        }
        if right_hi[d] > max_bound[d] {
            max_bound[d] = right_hi[d];
        }
    }

    let stem_idx = stems.len() as u32;
    stems.push(StemNode {
        min_bound,
        max_bound,
        left,
        right,
    });
    stem_idx
}

fn bounds_of<'a>(
    node_id: u32,
    stems: &'a [StemNode],
    leaves: &'a [LeafNode],
) -> (&'a [f32], &'a [f32]) {
    if is_stem(node_id) {
        let s = &stems[node_id as usize];
        (&s.min_bound, &s.max_bound)
    } else {
        let l = &leaves[leaf_id_of(node_id)];
        (&l.min_bound, &l.max_bound)
    }
}

fn bbox_of(points: &PointCloud, ids: &[u32]) -> (Vec<f32>, Vec<f32>) {
    let dim = points.dim();
    let first = points.point(ids[0] as usize);
    let mut min_bound = first.to_vec();
    let mut max_bound = first.to_vec();
    for &id in &ids[1..] {
        let p = points.point(id as usize);
        extend_bounds(&mut min_bound, &mut max_bound, p);
    }
    debug_assert_eq!(min_bound.len(), dim);
    (min_bound, max_bound)
}

/// The axis of widest extent over `ids`, smallest axis index breaking ties
/// so the split is a pure function of the coordinates.
fn widest_axis(points: &PointCloud, ids: &[u32]) -> usize {
    let (lo, hi) = bbox_of(points, ids);
    let mut best_axis = 0;
    let mut best_extent = hi[0] - lo[0];
    for d in 1..points.dim() {
        let extent = hi[d] - lo[d];
        if extent > best_extent {
            best_extent = extent;
            best_axis = d;
        }
    }
    best_axis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<f32> {
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]
    }

    #[test]
    fn single_leaf_when_capacity_covers_all_points() {
        let data = square();
        let pc = PointCloud::new(&data, 4, 2).unwrap();
        let tree = build(&pc, 8);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.stem_count(), 0);
        assert!(tree.check_invariants(&pc));
    }

    #[test]
    fn splits_into_multiple_leaves_with_capacity_one() {
        let data = square();
        let pc = PointCloud::new(&data, 4, 2).unwrap();
        let tree = build(&pc, 1);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.stem_count(), 3);
        assert!(tree.check_invariants(&pc));
    }

    #[test]
    fn every_point_reachable_exactly_once_on_a_larger_cloud() {
        let mut data = Vec::new();
        for i in 0..37u32 {
            data.push((i * 7 % 13) as f32);
            data.push((i * 3 % 11) as f32);
            data.push((i * 5 % 17) as f32);
        }
        let pc = PointCloud::new(&data, 37, 3).unwrap();
        for leaf_capacity in [1usize, 2, 4, 8] {
            let tree = build(&pc, leaf_capacity);
            assert!(tree.check_invariants(&pc));
        }
    }

    #[test]
    fn coincident_points_build_a_valid_tree() {
        let data = vec![1.0f32, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
        let pc = PointCloud::new(&data, 4, 2).unwrap();
        let tree = build(&pc, 1);
        assert!(tree.check_invariants(&pc));
    }
}
