//! Squared Euclidean distance and bounding-box helpers.
//!
//! Grounded on `float/distance.rs`'s `SquaredEuclidean` and `util.rs`'s
//! `extend`/`distance_to_bounds`/`clamp` in the teacher crate, adapted from
//! fixed-`K` arrays to runtime-length slices (`spec.md`'s `D` is a property
//! of the input, not of the type).

use num_traits::Float;
use std::fmt::Debug;

/// Coordinate type usable as a point-cloud axis. `f32` is what `spec.md`
/// calls for; the bound is kept generic (as in the teacher's own `Axis`
/// trait) so the same code serves `f64` callers without duplication.
pub trait Axis: Float + Default + Debug + Copy + Sync {}
impl<T: Float + Default + Debug + Copy + Sync> Axis for T {}

/// Squared Euclidean distance between two equal-length points, summed in
/// dimension order so the result is bitwise-reproducible across platforms
/// (`spec.md`'s float32-determinism note; cross-variant equivalence in
/// §8-5 depends on this).
#[inline]
pub fn squared_euclidean<A: Axis>(a: &[A], b: &[A]) -> A {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(A::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
}

#[inline]
fn clamp<A: Axis>(val: A, lo: A, hi: A) -> A {
    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// Squared distance from `point` to the closest point inside the
/// axis-aligned box `[lo, hi]` (zero if `point` is inside the box).
#[inline]
pub fn squared_distance_to_bounds<A: Axis>(point: &[A], lo: &[A], hi: &[A]) -> A {
    point
        .iter()
        .zip(lo.iter())
        .zip(hi.iter())
        .fold(A::zero(), |acc, ((&v, &lo), &hi)| {
            let c = clamp(v, lo, hi);
            acc + (v - c) * (v - c)
        })
}

/// Extends `min_bound`/`max_bound` componentwise so the box also contains
/// `point`.
#[inline]
pub fn extend_bounds<A: Axis>(min_bound: &mut [A], max_bound: &mut [A], point: &[A]) {
    for ((lo, hi), &v) in min_bound.iter_mut().zip(max_bound.iter_mut()).zip(point) {
        if v < *lo {
            *lo = v;
        }
        if v > *hi {
            *hi = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_euclidean_matches_hand_computation() {
        assert_eq!(squared_euclidean(&[0.0f32, 0.0], &[3.0, 4.0]), 25.0);
    }

    #[test]
    fn bounds_distance_is_zero_inside() {
        let lo = [0.0f32, 0.0];
        let hi = [1.0f32, 1.0];
        assert_eq!(squared_distance_to_bounds(&[0.5, 0.5], &lo, &hi), 0.0);
    }

    #[test]
    fn bounds_distance_measures_outside_gap() {
        let lo = [0.0f32, 0.0];
        let hi = [1.0f32, 1.0];
        assert_eq!(squared_distance_to_bounds(&[2.0, 1.0], &lo, &hi), 1.0);
    }

    #[test]
    fn extend_grows_box_to_include_point() {
        let mut lo = [0.0f32, 0.0];
        let mut hi = [1.0f32, 1.0];
        extend_bounds(&mut lo, &mut hi, &[-1.0, 2.0]);
        assert_eq!(lo, [-1.0, 0.0]);
        assert_eq!(hi, [1.0, 2.0]);
    }
}
