//! C5/C6 — Bucket FPS ("QuickFPS"): exact FPS accelerated by branch-and-bound
//! traversal of the kd-tree's per-node `node_dmin` caches (`spec.md` §4.6).
//!
//! C5 (single-point leaves) and C6 (kdline, up to `2^h`-point leaves) are
//! the same routine parametrized by `leaf_capacity` — the spec draws no
//! algorithmic distinction between them beyond bucket size, so neither does
//! this module.

use crate::distance::{squared_distance_to_bounds, squared_euclidean};
use crate::dmin::full_update;
use crate::error::{FpsError, Result};
use crate::kdtree::node::{is_stem, leaf_id_of};
use crate::kdtree::KdTree;
use crate::points::PointCloud;
use crate::start::Start;
use crate::validate::check_sample_count;

/// `node_dmin(T) = max_{i ∈ T} dmin[i]`, cached per node id as a pair of
/// side arrays rather than on `KdTree` itself (§3 of `SPEC_FULL.md`): the
/// tree is immutable and shared, while this cache is per-sampling-call
/// mutable state.
struct DminCache {
    stem_dmin: Vec<f32>,
    leaf_dmin: Vec<f32>,
}

impl DminCache {
    fn new(tree: &KdTree) -> Self {
        DminCache {
            stem_dmin: vec![f32::NEG_INFINITY; tree.stem_count()],
            leaf_dmin: vec![f32::NEG_INFINITY; tree.leaf_count()],
        }
    }

    #[inline]
    fn get(&self, node_id: u32) -> f32 {
        if is_stem(node_id) {
            self.stem_dmin[node_id as usize]
        } else {
            self.leaf_dmin[leaf_id_of(node_id)]
        }
    }

    #[inline]
    fn set(&mut self, node_id: u32, value: f32) {
        if is_stem(node_id) {
            self.stem_dmin[node_id as usize] = value;
        } else {
            self.leaf_dmin[leaf_id_of(node_id)] = value;
        }
    }
}

fn leaf_ids<'t>(tree: &'t KdTree, node_id: u32) -> &'t [u32] {
    let l = &tree.leaves[leaf_id_of(node_id)];
    &tree.order[l.start as usize..(l.start + l.len) as usize]
}

/// Bottom-up `node_dmin` initialization after the seed set's `dmin` updates
/// (§4.6 "Initialization").
fn init_node_dmin(tree: &KdTree, dmin: &[f32], node_id: u32, cache: &mut DminCache) -> f32 {
    let value = if is_stem(node_id) {
        let s = &tree.stems[node_id as usize];
        let left = init_node_dmin(tree, dmin, s.left, cache);
        let right = init_node_dmin(tree, dmin, s.right, cache);
        left.max(right)
    } else {
        leaf_ids(tree, node_id)
            .iter()
            .fold(f32::NEG_INFINITY, |acc, &id| acc.max(dmin[id as usize]))
    };
    cache.set(node_id, value);
    value
}

/// Update step (§4.6 "Update step"): prunes any subtree whose bbox is
/// already farther from `q` than its cached `node_dmin`, since no point in
/// it can have its `dmin` reduced.
fn update(tree: &KdTree, points: &PointCloud, dmin: &mut [f32], cache: &mut DminCache, node_id: u32, q: usize) {
    let (lo, hi) = tree.bbox(node_id);
    let lower_bound = squared_distance_to_bounds(points.point(q), lo, hi);
    if lower_bound >= cache.get(node_id) {
        return;
    }

    if is_stem(node_id) {
        let s = &tree.stems[node_id as usize];
        let (left, right) = (s.left, s.right);
        update(tree, points, dmin, cache, left, q);
        update(tree, points, dmin, cache, right, q);
        cache.set(node_id, cache.get(left).max(cache.get(right)));
    } else {
        let pq = points.point(q);
        let mut node_max = f32::NEG_INFINITY;
        for &id in leaf_ids(tree, node_id) {
            let idx = id as usize;
            let d = squared_euclidean(points.point(idx), pq);
            if d < dmin[idx] {
                dmin[idx] = d;
            }
            if dmin[idx] > node_max {
                node_max = dmin[idx];
            }
        }
        cache.set(node_id, node_max);
    }
}

/// Selection step (§4.6 "Selection step"): DFS that visits the child with
/// the larger `node_dmin` first, pruning the other child unless its bound
/// still exceeds the best candidate found so far. `selected` excludes
/// points already in `S` from consideration — necessary so that, in
/// degenerate inputs where many points share `dmin == 0`, the smallest-index
/// tie-break still only ever lands on a point not yet chosen (§8-6).
fn select(
    tree: &KdTree,
    dmin: &[f32],
    selected: &[bool],
    cache: &DminCache,
    node_id: u32,
) -> Option<(usize, f32)> {
    if is_stem(node_id) {
        let s = &tree.stems[node_id as usize];
        let (first, second) = if cache.get(s.left) >= cache.get(s.right) {
            (s.left, s.right)
        } else {
            (s.right, s.left)
        };

        let mut best = select(tree, dmin, selected, cache, first);
        let should_visit_second = match best {
            Some((_, best_val)) => cache.get(second) > best_val,
            None => true,
        };
        if should_visit_second {
            if let Some((idx, val)) = select(tree, dmin, selected, cache, second) {
                best = Some(match best {
                    Some((best_idx, best_val)) if best_val > val || (best_val == val && best_idx < idx) => {
                        (best_idx, best_val)
                    }
                    _ => (idx, val),
                });
            }
        }
        best
    } else {
        let mut best: Option<(usize, f32)> = None;
        for &id in leaf_ids(tree, node_id) {
            let idx = id as usize;
            if selected[idx] {
                continue;
            }
            let val = dmin[idx];
            best = Some(match best {
                Some((best_idx, best_val)) if best_val > val || (best_val == val && best_idx < idx) => {
                    (best_idx, best_val)
                }
                _ => (idx, val),
            });
        }
        best
    }
}

/// Shared routine behind both `sample_bucket_kdtree` (leaf_capacity = 1)
/// and `sample_bucket_kdline` (leaf_capacity = `2^h`).
pub(crate) fn sample_bucket(
    points: &PointCloud,
    n_samples: usize,
    start: Start,
    leaf_capacity: usize,
    variant_name: &'static str,
) -> Result<Vec<u64>> {
    check_sample_count(points, n_samples)?;
    let seeds = start.resolve(points, n_samples)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n_points = points.len(),
        n_samples,
        leaf_capacity,
        variant = variant_name,
        "starting sampling"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = variant_name;

    let tree = KdTree::build(points, leaf_capacity);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        leaves = tree.leaf_count(),
        stems = tree.stem_count(),
        "kd-tree built"
    );

    let n = points.len();
    let mut dmin = vec![f32::INFINITY; n];
    let mut selected = vec![false; n];
    let mut result = Vec::with_capacity(n_samples);

    for &q in &seeds {
        full_update(points, &mut dmin, q);
        selected[q] = true;
        result.push(q as u64);
    }

    let mut cache = DminCache::new(&tree);
    init_node_dmin(&tree, &dmin, tree.root, &mut cache);

    while result.len() < n_samples {
        let (q, _) = select(&tree, &dmin, &selected, &cache, tree.root)
            .expect("at least one unselected point remains while result.len() < n_samples");
        update(&tree, points, &mut dmin, &mut cache, tree.root, q);
        selected[q] = true;
        result.push(q as u64);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(n_samples, variant = variant_name, "finished sampling");

    Ok(result)
}

/// C5 — exact FPS accelerated by a single-point-leaf kd-tree.
pub fn sample_bucket_kdtree(points: &PointCloud, n_samples: usize, start: Start) -> Result<Vec<u64>> {
    sample_bucket(points, n_samples, start, 1, "bucket_kdtree")
}

/// C6 — exact FPS accelerated by a kdline tree whose leaves hold up to
/// `2^h` points.
pub fn sample_bucket_kdline(points: &PointCloud, n_samples: usize, h: u32, start: Start) -> Result<Vec<u64>> {
    let leaf_capacity = validate_h(h, points.len())?;
    sample_bucket(points, n_samples, start, leaf_capacity, "bucket_kdline")
}

fn validate_h(h: u32, n_points: usize) -> Result<usize> {
    if h < 1 || h >= usize::BITS {
        return Err(FpsError::InvalidLeafHeight { h, n_points });
    }
    let leaf_capacity = 1usize << h;
    if leaf_capacity > n_points {
        return Err(FpsError::InvalidLeafHeight { h, n_points });
    }
    Ok(leaf_capacity)
}
