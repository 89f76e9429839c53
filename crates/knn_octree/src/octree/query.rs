//! Branch-and-bound k-nearest-neighbor traversal.
//!
//! At an internal node the eight octants are ranked by a lower bound on the
//! squared distance from the query point to anything they can contain (see
//! [`geometry::octant_lower_bounds`]). The query point's own octant has a
//! bound of 0 and is visited first, which tightens the accumulator as early
//! as possible. Once the accumulator is full and its worst distance is no
//! greater than an octant's bound, that octant and every later one are
//! skipped.

use glam::DVec3;

use super::{Branches, OctreeNode, QueryStats};
use crate::best_k::BestK;
use crate::geometry;

impl OctreeNode {
  /// Offer every point of this subtree that can still improve `best`.
  ///
  /// `best` must weigh points by their squared distance to `point`,
  /// otherwise pruning is unsound. It may already hold candidates from
  /// other searches.
  pub fn search<F>(&self, point: DVec3, best: &mut BestK<DVec3, F>)
  where
    F: Fn(&DVec3) -> f64,
  {
    let mut stats = QueryStats::default();
    self.search_with_stats(point, best, &mut stats);
  }

  /// [`search`](Self::search), counting visited and pruned work into `stats`.
  pub fn search_with_stats<F>(
    &self,
    point: DVec3,
    best: &mut BestK<DVec3, F>,
    stats: &mut QueryStats,
  ) where
    F: Fn(&DVec3) -> f64,
  {
    stats.nodes_visited += 1;

    let children = match self.branches() {
      Branches::Leaf(buckets) => {
        stats.leaves_visited += 1;
        for &pt in buckets.iter().flatten() {
          stats.points_tested += 1;
          best.add(pt);
        }
        return;
      }
      Branches::Internal(children) => children,
    };

    let order = self.visit_order(point);
    for (rank, &(octant, bound)) in order.iter().enumerate() {
      let Some(child) = &children[octant as usize] else {
        stats.empty_octants_skipped += 1;
        continue;
      };
      if best.max_weight().is_some_and(|worst| worst <= bound) {
        // Bounds ascend, so nothing from here on can do better.
        stats.octants_pruned += order[rank..]
          .iter()
          .filter(|(o, _)| children[*o as usize].is_some())
          .count();
        break;
      }
      child.search_with_stats(point, best, stats);
    }
  }

  /// Octants paired with their lower bounds, nearest bound first.
  ///
  /// The sort is stable, so equal bounds keep ascending octant order.
  pub fn visit_order(&self, point: DVec3) -> [(u8, f64); 8] {
    let bounds = geometry::octant_lower_bounds(self.center(), point);
    let mut order: [(u8, f64); 8] = std::array::from_fn(|o| (o as u8, bounds[o]));
    order.sort_by(|a, b| a.1.total_cmp(&b.1));
    order
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
