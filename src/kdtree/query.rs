//! Bounded k-nearest-neighbour query used by the NPDU+KDTree variant (C4).
//!
//! Grounded on the teacher crate's `float/query/nearest_n.rs`: a
//! branch-and-bound traversal driven by a bounded max-heap (`min-max-heap`),
//! pruning any subtree whose bounding box is already farther than the
//! current worst kept neighbour.

use min_max_heap::MinMaxHeap;

use crate::distance::{squared_distance_to_bounds, squared_euclidean};
use crate::points::PointCloud;

use super::node::{is_stem, leaf_id_of};
use super::KdTree;

/// One result of a [`KdTree::nearest_n`] query: a point id and its squared
/// distance from the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    pub distance: f32,
    pub index: u32,
}

impl Eq for Neighbour {}

impl PartialOrd for Neighbour {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbour {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

pub(super) fn nearest_n(tree: &KdTree, points: &PointCloud, query: &[f32], w: usize) -> Vec<Neighbour> {
    if w == 0 || tree.is_empty() {
        return Vec::new();
    }

    let mut heap: MinMaxHeap<Neighbour> = MinMaxHeap::with_capacity(w);
    recur(tree, points, query, w, tree.root, &mut heap);

    let mut result = heap.into_vec();
    result.sort_unstable();
    result
}

fn recur(
    tree: &KdTree,
    points: &PointCloud,
    query: &[f32],
    w: usize,
    node_id: u32,
    heap: &mut MinMaxHeap<Neighbour>,
) {
    let (lo, hi) = tree.bbox(node_id);
    let bound_dist = squared_distance_to_bounds(query, lo, hi);

    if heap.len() >= w {
        if let Some(worst) = heap.peek_max() {
            if bound_dist > worst.distance {
                return;
            }
        }
    }

    if is_stem(node_id) {
        let s = &tree.stems[node_id as usize];
        recur(tree, points, query, w, s.left, heap);
        recur(tree, points, query, w, s.right, heap);
    } else {
        let l = &tree.leaves[leaf_id_of(node_id)];
        let ids = &tree.order[l.start as usize..(l.start + l.len) as usize];
        for &id in ids {
            let distance = squared_euclidean(query, points.point(id as usize));
            let candidate = Neighbour { distance, index: id };
            if heap.len() < w {
                heap.push(candidate);
            } else if let Some(worst) = heap.peek_max() {
                if candidate < *worst {
                    heap.push_pop_max(candidate);
                }
            }
        }
    }
}
