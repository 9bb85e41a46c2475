//! A balanced, median-split k-d tree over a static point cloud (`spec.md`
//! §3/§4.5, component C3).
//!
//! Built once per sampling call and never mutated afterwards — only the
//! per-run `node_dmin` caches used by the bucket-FPS variants (C5/C6) are
//! mutable, and those live outside this struct (see
//! [`crate::bucket::NodeDminCache`]).
//!
//! Node storage follows the teacher crate's array-of-structs layout
//! (`stems: Vec<StemNode>`, `leaves: Vec<LeafNode>`, node ids tagged via a
//! leaf-offset rather than an enum) for cache locality and to avoid an
//! owned, pointer-linked tree.

mod construction;
pub(crate) mod node;
mod query;

use crate::points::PointCloud;
use node::{is_stem, leaf_id_of, LeafNode, StemNode};

pub use query::Neighbour;

/// A static k-d tree over the points of a [`PointCloud`].
///
/// Leaves hold between 1 and `leaf_capacity` point ids; internal nodes
/// split on the axis of widest extent at the median coordinate. Tree shape
/// depends only on the input coordinates (and `leaf_capacity`) — it does
/// not change once built.
#[derive(Clone, Debug)]
pub struct KdTree {
    pub(crate) stems: Vec<StemNode>,
    pub(crate) leaves: Vec<LeafNode>,
    /// Permutation of point ids, grouped by leaf. `leaves[i]` owns the
    /// range `order[start..start+len]`.
    pub(crate) order: Vec<u32>,
    pub(crate) root: u32,
    pub(crate) leaf_capacity: usize,
}

impl KdTree {
    /// Builds a k-d tree over every point in `points`, with leaves holding
    /// up to `leaf_capacity` points each (`leaf_capacity == 1` gives the
    /// single-point-leaf tree used by C5; `leaf_capacity == 2^h` gives the
    /// kdline tree used by C6).
    ///
    /// # Panics
    /// Never: `points` is assumed already validated by the caller (every
    /// public entry point validates before building a tree).
    pub fn build(points: &PointCloud, leaf_capacity: usize) -> Self {
        construction::build(points, leaf_capacity.max(1))
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of internal (stem) nodes.
    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }

    /// The `w` nearest points to `query` by squared Euclidean distance,
    /// sorted nearest-first (ties broken by smaller point id), excluding no
    /// point (the query point itself, if present in the tree, is included
    /// were it is exactly at distance zero from itself — callers that want
    /// "exclude self" should filter it out).
    ///
    /// Used by C4 to realize "query the kd-tree for q's w approximate
    /// nearest neighbours by index" (`spec.md` §4.4).
    pub fn nearest_n(&self, points: &PointCloud, query: &[f32], w: usize) -> Vec<Neighbour> {
        query::nearest_n(self, points, query, w)
    }

    pub(crate) fn bbox(&self, node_id: u32) -> (&[f32], &[f32]) {
        if is_stem(node_id) {
            let s = &self.stems[node_id as usize];
            (&s.min_bound, &s.max_bound)
        } else {
            let l = &self.leaves[leaf_id_of(node_id)];
            (&l.min_bound, &l.max_bound)
        }
    }

    /// Validates the structural kd-tree invariants from `spec.md` §8-8:
    /// every point belongs to exactly one leaf, and every node's bounding
    /// box tightly contains its subtree. Intended for use from tests.
    pub fn check_invariants(&self, points: &PointCloud) -> bool {
        if self.order.len() != points.len() {
            return false;
        }
        let mut seen = vec![false; points.len()];
        for &id in &self.order {
            if seen[id as usize] {
                return false; // a point appearing twice
            }
            seen[id as usize] = true;
        }
        if seen.iter().any(|&s| !s) {
            return false; // a point missing from every leaf
        }
        self.check_bbox(self.root, points)
    }

    fn check_bbox(&self, node_id: u32, points: &PointCloud) -> bool {
        if is_stem(node_id) {
            let s = &self.stems[node_id as usize];
            if !bbox_matches_children(s, self, points) {
                return false;
            }
            self.check_bbox(s.left, points) && self.check_bbox(s.right, points)
        } else {
            let l = &self.leaves[leaf_id_of(node_id)];
            let ids = &self.order[l.start as usize..(l.start + l.len) as usize];
            ids.iter().all(|&id| {
                let p = points.point(id as usize);
                (0..points.dim()).all(|d| p[d] >= l.min_bound[d] && p[d] <= l.max_bound[d])
            })
        }
    }
}

fn bbox_matches_children(s: &StemNode, tree: &KdTree, points: &PointCloud) -> bool {
    let dim = points.dim();
    (0..dim).all(|d| {
        let (left_lo, left_hi) = tree.bbox(s.left);
        let (right_lo, right_hi) = tree.bbox(s.right);
        let lo = left_lo[d].min(right_lo[d]);
        let hi = left_hi[d].max(right_hi[d]);
        (s.min_bound[d] - lo).abs() < 1e-5 && (s.max_bound[d] - hi).abs() < 1e-5
    })
}
