//! A borrowed, row-major view over an `(n_points, dim)` matrix of `f32`
//! coordinates.
//!
//! Row-major (point-contiguous) layout is used uniformly across every
//! variant in this crate — see `SPEC_FULL.md` §9 for why the dual
//! row-/column-major layout the reference behavior hints at isn't carried
//! over here.

use crate::error::{FpsError, Result};

/// An immutable point cloud: `n_points` points of `dim` `f32` coordinates
/// each, stored point-contiguously in a single flat slice.
#[derive(Clone, Copy, Debug)]
pub struct PointCloud<'a> {
    data: &'a [f32],
    n_points: usize,
    dim: usize,
}

impl<'a> PointCloud<'a> {
    /// Wraps `data` as a point cloud of `n_points` points with `dim`
    /// coordinates each.
    ///
    /// # Errors
    /// Returns [`FpsError::NotTwoDimensional`] if `data.len() != n_points * dim`,
    /// and [`FpsError::EmptyPointCloud`] if `n_points == 0` or `dim == 0`.
    pub fn new(data: &'a [f32], n_points: usize, dim: usize) -> Result<Self> {
        if n_points == 0 || dim == 0 {
            return Err(FpsError::EmptyPointCloud { n_points, dim });
        }
        if data.len() != n_points * dim {
            return Err(FpsError::NotTwoDimensional {
                len: data.len(),
                dim,
            });
        }
        Ok(PointCloud {
            data,
            n_points,
            dim,
        })
    }

    /// Number of points, `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_points
    }

    /// `len() == 0`. Always `false` for a successfully constructed cloud,
    /// kept for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// Number of coordinates per point, `D`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Borrows the coordinates of point `i`.
    #[inline]
    pub fn point(&self, i: usize) -> &[f32] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    /// The full flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.data
    }
}
