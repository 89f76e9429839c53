//! OctreeNode - recursive centroid partition of a point set.
//!
//! Every node splits its points into the eight octants around their own
//! centroid. Nodes holding at most `leaf_capacity` points keep them raw,
//! larger nodes own one child per non-empty octant.

use glam::DVec3;
use rayon::prelude::*;
use smallvec::SmallVec;

use super::OctreeConfig;
use crate::geometry;

/// Raw points of one leaf octant, usually zero or one so kept inline.
pub type LeafBucket = SmallVec<[DVec3; 1]>;

/// Contents of a node, indexed by octant.
#[derive(Clone, Debug, PartialEq)]
pub enum Branches {
  /// Raw points per octant; empty octants are empty buckets.
  Leaf([LeafBucket; 8]),
  /// One child per octant; `None` marks an octant with no points.
  Internal([Option<Box<OctreeNode>>; 8]),
}

/// A node of the centroid octree. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
  center: DVec3,
  size: usize,
  depth: usize,
  branches: Branches,
}

impl OctreeNode {
  /// Build a root node (depth 0) from `points`.
  ///
  /// `points` must be non-empty and should be distinct. Coincident points
  /// that would otherwise split forever end up together in one leaf.
  pub fn build(points: Vec<DVec3>, config: &OctreeConfig) -> Self {
    Self::build_at(points, 0, config)
  }

  fn build_at(points: Vec<DVec3>, depth: usize, config: &OctreeConfig) -> Self {
    debug_assert!(!points.is_empty(), "octree node built from no points");

    let center = geometry::center(&points);
    let size = points.len();

    let mut buckets: [Vec<DVec3>; 8] = Default::default();
    for pt in points {
      buckets[geometry::octant(center, pt) as usize].push(pt);
    }

    // All points in one octant means they coincide (up to centroid rounding)
    // and splitting again would make no progress.
    let stalled = buckets.iter().any(|bucket| bucket.len() == size);

    let branches = if size <= config.leaf_capacity || stalled {
      Branches::Leaf(buckets.map(LeafBucket::from_vec))
    } else {
      Branches::Internal(Self::build_children(buckets, size, depth + 1, config))
    };

    Self {
      center,
      size,
      depth,
      branches,
    }
  }

  fn build_children(
    mut buckets: [Vec<DVec3>; 8],
    size: usize,
    depth: usize,
    config: &OctreeConfig,
  ) -> [Option<Box<OctreeNode>>; 8] {
    if !config.builds_in_parallel(size) {
      return buckets.map(|bucket| {
        (!bucket.is_empty()).then(|| Box::new(Self::build_at(bucket, depth, config)))
      });
    }

    let mut children: [Option<Box<OctreeNode>>; 8] = Default::default();
    children
      .par_iter_mut()
      .zip(buckets.par_iter_mut())
      .for_each(|(slot, bucket)| {
        if !bucket.is_empty() {
          let bucket = std::mem::take(bucket);
          *slot = Some(Box::new(Self::build_at(bucket, depth, config)));
        }
      });
    children
  }

  /// Centroid of the points in this subtree.
  #[inline]
  pub fn center(&self) -> DVec3 {
    self.center
  }

  /// Number of points in this subtree.
  #[inline]
  pub fn len(&self) -> usize {
    self.size
  }

  /// Check if this subtree holds no points. Built nodes never are.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Distance from the root, in levels.
  #[inline]
  pub fn depth(&self) -> usize {
    self.depth
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.branches, Branches::Leaf(_))
  }

  /// Octant of `point` relative to this node's center.
  #[inline]
  pub fn octant(&self, point: DVec3) -> u8 {
    geometry::octant(self.center, point)
  }

  #[inline]
  pub fn branches(&self) -> &Branches {
    &self.branches
  }

  /// Child in `octant`, or `None` for leaves and empty octants.
  pub fn child(&self, octant: u8) -> Option<&OctreeNode> {
    match &self.branches {
      Branches::Internal(children) => children[octant as usize].as_deref(),
      Branches::Leaf(_) => None,
    }
  }

  /// Raw points in `octant`, or `None` for internal nodes.
  pub fn leaf_points(&self, octant: u8) -> Option<&[DVec3]> {
    match &self.branches {
      Branches::Leaf(buckets) => Some(buckets[octant as usize].as_slice()),
      Branches::Internal(_) => None,
    }
  }

  /// Every point in this subtree, depth-first in octant order.
  pub fn points(&self) -> Box<dyn Iterator<Item = DVec3> + '_> {
    match &self.branches {
      Branches::Leaf(buckets) => Box::new(buckets.iter().flatten().copied()),
      Branches::Internal(children) => {
        Box::new(children.iter().flatten().flat_map(|child| child.points()))
      }
    }
  }

  /// Nodes in this subtree, including this one.
  pub fn node_count(&self) -> usize {
    match &self.branches {
      Branches::Leaf(_) => 1,
      Branches::Internal(children) => {
        1 + children.iter().flatten().map(|c| c.node_count()).sum::<usize>()
      }
    }
  }

  /// Leaves in this subtree.
  pub fn leaf_count(&self) -> usize {
    match &self.branches {
      Branches::Leaf(_) => 1,
      Branches::Internal(children) => children.iter().flatten().map(|c| c.leaf_count()).sum(),
    }
  }

  /// Deepest leaf depth in this subtree.
  pub fn max_depth(&self) -> usize {
    match &self.branches {
      Branches::Leaf(_) => self.depth,
      Branches::Internal(children) => children
        .iter()
        .flatten()
        .map(|c| c.max_depth())
        .max()
        .unwrap_or(self.depth),
    }
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
