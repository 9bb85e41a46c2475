//! Error taxonomy for the sampling entry points.
//!
//! Every variant is raised before any sampling state is allocated: argument
//! validation and sampling never interleave (see `spec.md` §7).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FpsError>;

/// Everything that can go wrong when calling one of the `sample_*` entry
/// points, reported before sampling begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FpsError {
    /// The input wasn't shaped like an `(n_points, dim)` matrix.
    #[error("point cloud must be 2-dimensional (n_points x dim), got a flat buffer of length {len} that does not divide evenly by dim {dim}")]
    NotTwoDimensional { len: usize, dim: usize },

    /// `dim == 0` or `n_points == 0`.
    #[error("point cloud is empty (n_points={n_points}, dim={dim})")]
    EmptyPointCloud { n_points: usize, dim: usize },

    /// `n_samples == 0`.
    #[error("n_samples must be >= 1, got 0")]
    ZeroSamples,

    /// `n_samples > n_points`.
    #[error("n_points ({n_points}) must be >= n_samples ({n_samples})")]
    TooFewPoints { n_points: usize, n_samples: usize },

    /// A single start index was out of range.
    #[error("start index {index} is out of range for a point cloud of {n_points} points")]
    StartIndexOutOfRange { index: usize, n_points: usize },

    /// A start list had more entries than `n_samples`.
    #[error("start list has {len} entries, which exceeds n_samples ({n_samples})")]
    StartListTooLong { len: usize, n_samples: usize },

    /// A start list contained the same index twice.
    #[error("start list contains duplicate index {index}")]
    DuplicateStartIndex { index: usize },

    /// C6's leaf height parameter was invalid.
    #[error("leaf height h={h} is invalid: require h >= 1 and 2^h <= n_points ({n_points})")]
    InvalidLeafHeight { h: u32, n_points: usize },
}
