//! Error type for octree construction and queries.

use thiserror::Error;

/// Errors reported by the [`Octree`](crate::Octree) facade.
///
/// All of these are caller errors: the tree never fails on valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OctreeError {
  /// Construction was given no points.
  #[error("cannot build an octree from an empty point set")]
  EmptyPointSet,

  /// A point has a NaN or infinite coordinate.
  #[error("point {index} has a non-finite coordinate")]
  NonFinitePoint {
    /// Position of the offending point in the input.
    index: usize,
  },

  /// A query point has a NaN or infinite coordinate.
  #[error("query point has a non-finite coordinate")]
  NonFiniteQuery,

  /// A nearest-neighbor query asked for zero results.
  #[error("k must be at least 1")]
  ZeroK,

  /// The build configuration is unusable.
  #[error("invalid octree config: {0}")]
  InvalidConfig(&'static str),
}
