//! Preconditions shared by every entry point (`spec.md` §4.1, §7).

use crate::error::{FpsError, Result};
use crate::points::PointCloud;

/// Checks the `M ≥ 1` and `N ≥ M` preconditions common to every variant,
/// ahead of any other validation (start-list checks, `h` checks) or
/// allocation.
pub(crate) fn check_sample_count(points: &PointCloud, n_samples: usize) -> Result<()> {
    if n_samples == 0 {
        return Err(FpsError::ZeroSamples);
    }
    if points.len() < n_samples {
        return Err(FpsError::TooFewPoints {
            n_points: points.len(),
            n_samples,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(n: usize) -> Vec<f32> {
        vec![0.0; n * 2]
    }

    #[test]
    fn rejects_zero_samples() {
        let data = cloud(5);
        let pc = PointCloud::new(&data, 5, 2).unwrap();
        assert_eq!(
            check_sample_count(&pc, 0).unwrap_err(),
            FpsError::ZeroSamples
        );
    }

    #[test]
    fn rejects_too_few_points() {
        let data = cloud(3);
        let pc = PointCloud::new(&data, 3, 2).unwrap();
        assert!(matches!(
            check_sample_count(&pc, 5).unwrap_err(),
            FpsError::TooFewPoints { .. }
        ));
    }

    #[test]
    fn accepts_m_equal_n() {
        let data = cloud(4);
        let pc = PointCloud::new(&data, 4, 2).unwrap();
        assert!(check_sample_count(&pc, 4).is_ok());
    }
}
