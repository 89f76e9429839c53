//! Octree - validated entry point owning the root node.

use glam::DVec3;

use super::{OctreeConfig, OctreeNode, QueryStats};
use crate::best_k::BestK;
use crate::error::OctreeError;

/// A centroid octree over a fixed point set.
///
/// Built once and never mutated, so a shared `&Octree` can serve queries
/// from many threads at once; each query owns its own accumulator.
#[derive(Clone, Debug)]
pub struct Octree {
  root: OctreeNode,
  config: OctreeConfig,
}

impl Octree {
  /// Build with [`OctreeConfig::DEFAULT`].
  pub fn new<I, P>(points: I) -> Result<Self, OctreeError>
  where
    I: IntoIterator<Item = P>,
    P: Into<DVec3>,
  {
    Self::with_config(points, OctreeConfig::DEFAULT)
  }

  /// Build from `points` with explicit parameters.
  ///
  /// Fails on an empty point set, a non-finite coordinate, or an invalid
  /// config. Points should be distinct; duplicates are kept but which of
  /// them a query reports first is unspecified.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn with_config<I, P>(points: I, config: OctreeConfig) -> Result<Self, OctreeError>
  where
    I: IntoIterator<Item = P>,
    P: Into<DVec3>,
  {
    config.validate()?;

    let points: Vec<DVec3> = points.into_iter().map(Into::into).collect();
    if points.is_empty() {
      return Err(OctreeError::EmptyPointSet);
    }
    if let Some(index) = points.iter().position(|pt| !pt.is_finite()) {
      return Err(OctreeError::NonFinitePoint { index });
    }

    let root = OctreeNode::build(points, &config);

    #[cfg(feature = "tracing")]
    tracing::debug!(
      points = root.len(),
      nodes = root.node_count(),
      leaves = root.leaf_count(),
      max_depth = root.max_depth(),
      "octree built"
    );

    Ok(Self { root, config })
  }

  #[inline]
  pub fn root(&self) -> &OctreeNode {
    &self.root
  }

  #[inline]
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Number of points indexed.
  #[inline]
  pub fn len(&self) -> usize {
    self.root.len()
  }

  /// Always false: construction rejects empty point sets.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.root.is_empty()
  }

  /// Centroid of all indexed points.
  #[inline]
  pub fn center(&self) -> DVec3 {
    self.root.center()
  }

  /// True when the whole set fits in a single leaf.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.root.is_leaf()
  }

  /// Every indexed point, in tree order.
  pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
    self.root.points()
  }

  /// The `k` points closest to `point` by squared Euclidean distance,
  /// nearest first.
  ///
  /// Returns every point when `k` exceeds [`len`](Self::len). Equal
  /// distances are reported in the order the traversal reached them.
  /// Fails if `k` is 0 or `point` has a non-finite coordinate.
  pub fn nearest(&self, k: usize, point: impl Into<DVec3>) -> Result<Vec<DVec3>, OctreeError> {
    let (found, _) = self.nearest_with_stats(k, point)?;
    Ok(found)
  }

  /// [`nearest`](Self::nearest) paired with each point's squared distance.
  pub fn nearest_with_distances(
    &self,
    k: usize,
    point: impl Into<DVec3>,
  ) -> Result<Vec<(DVec3, f64)>, OctreeError> {
    let mut stats = QueryStats::default();
    self.query(k, point.into(), &mut stats)
  }

  /// [`nearest`](Self::nearest) together with traversal statistics.
  pub fn nearest_with_stats(
    &self,
    k: usize,
    point: impl Into<DVec3>,
  ) -> Result<(Vec<DVec3>, QueryStats), OctreeError> {
    let mut stats = QueryStats::default();
    let found = self.query(k, point.into(), &mut stats)?;
    Ok((found.into_iter().map(|(pt, _)| pt).collect(), stats))
  }

  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::nearest"))]
  fn query(
    &self,
    k: usize,
    point: DVec3,
    stats: &mut QueryStats,
  ) -> Result<Vec<(DVec3, f64)>, OctreeError> {
    if k == 0 {
      return Err(OctreeError::ZeroK);
    }
    if !point.is_finite() {
      return Err(OctreeError::NonFiniteQuery);
    }
    let mut best = BestK::new(k.min(self.len()), |pt: &DVec3| pt.distance_squared(point));
    self.root.search_with_stats(point, &mut best, stats);
    Ok(best.into_weighted())
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
