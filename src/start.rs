//! Start-descriptor polymorphism (`spec.md` §4.7, §9).
//!
//! Callers either give a single start index or an ordered list of seeds.
//! Both are resolved into a single validated seed list before any variant's
//! shared skeleton runs.

use crate::error::{FpsError, Result};
use crate::points::PointCloud;

/// The start descriptor accepted by every `sample_*` entry point.
#[derive(Clone, Debug)]
pub enum Start {
    /// A single seed index.
    Single(usize),
    /// An ordered, duplicate-free list of seed indices, all present (in
    /// order) at the front of the result.
    Multi(Vec<usize>),
}

impl Start {
    /// Validates this descriptor against a point cloud and sample count,
    /// returning the resolved seed sequence.
    pub(crate) fn resolve(&self, points: &PointCloud, n_samples: usize) -> Result<Vec<usize>> {
        let seeds: Vec<usize> = match self {
            Start::Single(idx) => vec![*idx],
            Start::Multi(list) => list.clone(),
        };

        if seeds.len() > n_samples {
            return Err(FpsError::StartListTooLong {
                len: seeds.len(),
                n_samples,
            });
        }

        let mut seen = std::collections::HashSet::with_capacity(seeds.len());
        for &idx in &seeds {
            if idx >= points.len() {
                return Err(FpsError::StartIndexOutOfRange {
                    index: idx,
                    n_points: points.len(),
                });
            }
            if !seen.insert(idx) {
                return Err(FpsError::DuplicateStartIndex { index: idx });
            }
        }

        Ok(seeds)
    }
}

impl From<usize> for Start {
    fn from(index: usize) -> Self {
        Start::Single(index)
    }
}

impl From<Vec<usize>> for Start {
    fn from(indices: Vec<usize>) -> Self {
        Start::Multi(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(n: usize) -> Vec<f32> {
        vec![0.0; n * 3]
    }

    #[test]
    fn single_resolves_to_one_seed() {
        let data = cloud(5);
        let pc = PointCloud::new(&data, 5, 3).unwrap();
        let seeds = Start::Single(2).resolve(&pc, 3).unwrap();
        assert_eq!(seeds, vec![2]);
    }

    #[test]
    fn rejects_out_of_range() {
        let data = cloud(5);
        let pc = PointCloud::new(&data, 5, 3).unwrap();
        assert!(matches!(
            Start::Single(5).resolve(&pc, 3).unwrap_err(),
            FpsError::StartIndexOutOfRange { .. }
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let data = cloud(5);
        let pc = PointCloud::new(&data, 5, 3).unwrap();
        assert!(matches!(
            Start::Multi(vec![1, 1]).resolve(&pc, 3).unwrap_err(),
            FpsError::DuplicateStartIndex { .. }
        ));
    }

    #[test]
    fn rejects_too_long() {
        let data = cloud(5);
        let pc = PointCloud::new(&data, 5, 3).unwrap();
        assert!(matches!(
            Start::Multi(vec![0, 1, 2]).resolve(&pc, 2).unwrap_err(),
            FpsError::StartListTooLong { .. }
        ));
    }
}
