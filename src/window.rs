//! The NPDU window-size parameter `w` shared by C2 and C4 (`spec.md` §4.3,
//! §4.4, §9).

/// Default `w = ⌊N/M · 16⌋`, the formula `spec.md` §9 keeps without
/// claiming to justify — re-implementations are told to keep it and expose
/// `w` rather than hide or retune it.
fn default_w(n_points: usize, n_samples: usize) -> usize {
    (n_points * 16) / n_samples
}

/// Resolves the caller-supplied `w` (or the default) and clamps it to
/// `max_w`, warning whenever `w` reaches or exceeds `max_w` (`spec.md`
/// §7-4). The boundary itself (`w == max_w`) already triggers the warning —
/// the reference wrapper warns at `w >= n_pts - 1`, not only strictly past
/// it.
pub(crate) fn resolve_w(w: Option<usize>, n_points: usize, n_samples: usize, max_w: usize) -> usize {
    let requested = w.unwrap_or_else(|| default_w(n_points, n_samples));
    if requested >= max_w {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            requested_w = requested,
            clamped_w = max_w,
            "window size exceeds the point cloud; clamping"
        );
        max_w
    } else {
        requested
    }
}
