//! C1 — Vanilla FPS: the exact O(M·N) reference algorithm (`spec.md` §4.2).

use crate::dmin::{full_update, select_farthest};
use crate::points::PointCloud;
use crate::start::Start;
use crate::validate::check_sample_count;
use crate::Result;

/// Exact farthest-point sampling: full-scan selection, full-scan update.
/// The reference every other variant is checked against (§8-5).
pub fn sample_vanilla(points: &PointCloud, n_samples: usize, start: Start) -> Result<Vec<u64>> {
    check_sample_count(points, n_samples)?;
    let seeds = start.resolve(points, n_samples)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        n_points = points.len(),
        n_samples,
        variant = "vanilla",
        "starting sampling"
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

    while result.len() < n_samples {
        let q = select_farthest(&dmin, &selected);
        full_update(points, &mut dmin, q);
        selected[q] = true;
        result.push(q as u64);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(n_samples, variant = "vanilla", "finished sampling");

    Ok(result)
}
