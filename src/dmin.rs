//! Maintenance of the min-distance vector `dmin` (`spec.md` §3, §4.1) and the
//! `argmax dmin` selection rule shared by C1 and C2.

use crate::distance::squared_euclidean;
use crate::points::PointCloud;

/// Updates `dmin[i]` for every `i` in `[lo, hi]` (inclusive) against newly
/// selected point `q`. The generic skeleton's seeding pass (§4.1 step 2)
/// calls this with the full range; C2's windowed update (§4.3) calls it
/// with a narrow one.
pub(crate) fn range_update(points: &PointCloud, dmin: &mut [f32], q: usize, lo: usize, hi: usize) {
    let pq = points.point(q);
    for i in lo..=hi {
        let d = squared_euclidean(points.point(i), pq);
        if d < dmin[i] {
            dmin[i] = d;
        }
    }
}

/// Updates every entry of `dmin` against `q` (§4.1 step 2, and C1's full
/// update rule §4.2).
pub(crate) fn full_update(points: &PointCloud, dmin: &mut [f32], q: usize) {
    range_update(points, dmin, q, 0, points.len() - 1);
}

/// `argmax_i dmin[i]` over every `i` not already selected, ties broken by
/// the smallest index (§4.2, §8-4).
///
/// # Panics
/// Panics if every index is already selected; callers only invoke this
/// while `|S| < N`.
pub(crate) fn select_farthest(dmin: &[f32], selected: &[bool]) -> usize {
    let mut best_idx = None;
    let mut best_val = f32::NEG_INFINITY;
    for (i, &is_selected) in selected.iter().enumerate() {
        if is_selected {
            continue;
        }
        if dmin[i] > best_val {
            best_val = dmin[i];
            best_idx = Some(i);
        }
    }
    best_idx.expect("select_farthest called with no unselected points remaining")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_update_shrinks_every_entry() {
        let data = [0.0f32, 0.0, 1.0, 0.0, 3.0, 0.0];
        let pc = PointCloud::new(&data, 3, 2).unwrap();
        let mut dmin = vec![f32::INFINITY; 3];
        full_update(&pc, &mut dmin, 0);
        assert_eq!(dmin, vec![0.0, 1.0, 9.0]);
    }

    #[test]
    fn select_farthest_skips_selected_and_breaks_ties_low() {
        let dmin = [5.0, 5.0, 3.0];
        let selected = [true, false, false];
        assert_eq!(select_farthest(&dmin, &selected), 1);
    }
}
