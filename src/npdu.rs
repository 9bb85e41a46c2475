//! C2 — NPDU FPS: the sliding-window heuristic over natural index order
//! (`spec.md` §4.3).

use crate::dmin::{full_update, range_update, select_farthest};
use crate::points::PointCloud;
use crate::start::Start;
use crate::validate::check_sample_count;
use crate::window::resolve_w;
use crate::Result;

/// Heuristic FPS: after each selection, only the `2w+1`-wide window of
/// natural-order neighbours around the new point has its `dmin` refreshed.
/// Quality depends entirely on the input's index order carrying spatial
/// locality; no exactness guarantee (§4.3).
pub fn sample_npdu(
    points: &PointCloud,
    n_samples: usize,
    w: Option<usize>,
    start: Start,
) -> Result<Vec<u64>> {
    check_sample_count(points, n_samples)?;
    let seeds = start.resolve(points, n_samples)?;

    let n = points.len();
    let w = resolve_w(w, n, n_samples, n - 1);

    #[cfg(feature = "tracing")]
    tracing::debug!(n_points = n, n_samples, w, variant = "npdu", "starting sampling");

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
        let lo = q.saturating_sub(w);
        let hi = (q + w).min(n - 1);
        range_update(points, &mut dmin, q, lo, hi);
        selected[q] = true;
        result.push(q as u64);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(n_samples, variant = "npdu", "finished sampling");

    Ok(result)
}
