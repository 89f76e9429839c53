//! OctreeConfig - build parameters for the centroid octree.

use crate::error::OctreeError;

/// Build parameters for [`Octree`](super::Octree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
  /// Nodes holding at most this many points become leaves.
  pub leaf_capacity: usize,
  /// Nodes holding more than this many points build their children on
  /// the rayon pool. `usize::MAX` keeps construction on the calling thread.
  pub parallel_threshold: usize,
}

impl OctreeConfig {
  /// Leaves of up to 4 points, parallel build above 16k points.
  pub const DEFAULT: Self = Self {
    leaf_capacity: 4,
    parallel_threshold: 16 * 1024,
  };

  /// Same shape as [`DEFAULT`](Self::DEFAULT), built on one thread.
  pub const SEQUENTIAL: Self = Self {
    leaf_capacity: 4,
    parallel_threshold: usize::MAX,
  };

  /// Check the config can build a tree.
  pub fn validate(&self) -> Result<(), OctreeError> {
    if self.leaf_capacity == 0 {
      return Err(OctreeError::InvalidConfig("leaf_capacity must be at least 1"));
    }
    Ok(())
  }

  /// Whether a node of `size` points should build its children in parallel.
  #[inline]
  pub fn builds_in_parallel(&self, size: usize) -> bool {
    size > self.parallel_threshold
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}
