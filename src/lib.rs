#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![doc(issue_tracker_base_url = "https://github.com/sdd/fpsample/issues/")]

//! # fpsample
//!
//! Farthest Point Sampling over point clouds of `f32` coordinates: given `N`
//! points in `D`-dimensional Euclidean space, greedily select `M ≤ N` points
//! such that each one, in turn, is the farthest from the points already
//! selected. FPS yields a well-spread representative subset and is a common
//! primitive in geometry processing and point-cloud learning pipelines.
//!
//! Five variants are exposed, sharing the same contract
//! (`sample(points, n_samples, start) → indices`) and differing only in how
//! they find the next farthest point and which parts of the min-distance
//! vector they refresh after each selection:
//!
//! - [`sample_vanilla`] — exact, full-scan reference (`O(M·N)`).
//! - [`sample_npdu`] — sliding-window heuristic over natural index order.
//! - [`sample_npdu_kdtree`] — the same heuristic, windowed by kd-tree
//!   proximity instead of index order.
//! - [`sample_bucket_kdtree`] / [`sample_bucket_kdline`] — exact FPS
//!   ("QuickFPS"), accelerated by branch-and-bound traversal of a shared
//!   [`KdTree`] with single-point or multi-point leaves respectively.
//!
//! ## Usage
//! ```rust
//! use fpsample::{sample_vanilla, PointCloud, Start};
//!
//! let data = [0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];
//! let points = PointCloud::new(&data, 4, 2).unwrap();
//!
//! let sample = sample_vanilla(&points, 4, Start::Single(0)).unwrap();
//! assert_eq!(sample, vec![0, 3, 1, 2]);
//! ```

mod bucket;
mod distance;
mod dmin;
mod error;
pub mod kdtree;
mod npdu;
mod npdu_kdtree;
mod points;
mod start;
mod validate;
mod vanilla;
mod window;

pub use bucket::{sample_bucket_kdline, sample_bucket_kdtree};
pub use error::FpsError;
pub use kdtree::KdTree;
pub use npdu::sample_npdu;
pub use npdu_kdtree::sample_npdu_kdtree;
pub use points::PointCloud;
pub use start::Start;
pub use vanilla::sample_vanilla;

pub(crate) use error::Result;
