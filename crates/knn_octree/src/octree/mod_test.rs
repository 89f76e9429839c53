use glam::DVec3;
use rayon::prelude::*;

use super::*;
use crate::octree::test_utils::{brute_force_nearest, distances, random_points};

// =========================================================================
// Concurrent Reads
// =========================================================================

#[test]
fn test_octree_is_send_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Octree>();
  assert_send_sync::<OctreeNode>();
}

/// Many threads querying one tree get the same answers as a serial loop.
#[test]
fn test_parallel_queries_match_serial() {
  let points = random_points(3000, 60.0, 101);
  let tree = Octree::with_config(
    points.iter().copied(),
    OctreeConfig {
      parallel_threshold: 256,
      ..OctreeConfig::DEFAULT
    },
  )
  .unwrap();
  let queries = random_points(200, 70.0, 102);

  let serial: Vec<Vec<DVec3>> = queries
    .iter()
    .map(|&q| tree.nearest(8, q).unwrap())
    .collect();
  let parallel: Vec<Vec<DVec3>> = queries
    .par_iter()
    .map(|&q| tree.nearest(8, q).unwrap())
    .collect();

  assert_eq!(serial, parallel);
  for (found, &query) in parallel.iter().zip(&queries) {
    let expected = brute_force_nearest(&points, 8, query);
    assert_eq!(distances(found, query), distances(&expected, query));
  }
}
