//! Test utilities for octree tests.
//!
//! Seeded point clouds and a brute-force k-NN reference.

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Eight points from a surveyed scan, used as an end-to-end fixture.
pub const SCAN_POINTS: [[f64; 3]; 8] = [
  [219.740502, 0.003449, 4.177065],
  [45.210918, 0.003365, -16.008996],
  [344.552785, 0.030213, 277.614965],
  [82.835513, 0.012476, -105.61954],
  [195.714261, 0.034068, -167.695291],
  [54.905296, 0.017912, 3.787796],
  [54.367897, 0.020886, 19.827115],
  [180.654532, 0.086213, 87.668389],
];

/// Uniform points inside a cube of half-extent `extent` around the origin.
pub fn random_points(count: usize, extent: f64, seed: u64) -> Vec<DVec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      DVec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
      )
    })
    .collect()
}

/// Points bunched into a few tight clusters, to produce lopsided trees.
pub fn clustered_points(count: usize, seed: u64) -> Vec<DVec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  let centers = [
    DVec3::new(-50.0, 10.0, 0.0),
    DVec3::new(40.0, -30.0, 25.0),
    DVec3::new(5.0, 60.0, -45.0),
  ];
  (0..count)
    .map(|i| {
      let c = centers[i % centers.len()];
      c + DVec3::new(
        rng.random_range(-0.5..0.5),
        rng.random_range(-0.5..0.5),
        rng.random_range(-0.5..0.5),
      )
    })
    .collect()
}

/// Brute-force k nearest, nearest first; equal distances keep input order.
pub fn brute_force_nearest(points: &[DVec3], k: usize, query: DVec3) -> Vec<DVec3> {
  let mut sorted: Vec<DVec3> = points.to_vec();
  sorted.sort_by(|a, b| {
    a.distance_squared(query)
      .total_cmp(&b.distance_squared(query))
  });
  sorted.truncate(k);
  sorted
}

/// Squared distances from `query`, in the given order.
pub fn distances(points: &[DVec3], query: DVec3) -> Vec<f64> {
  points.iter().map(|p| p.distance_squared(query)).collect()
}

/// Points sorted lexicographically, for multiset comparison.
pub fn sorted_points(mut points: Vec<DVec3>) -> Vec<DVec3> {
  points.sort_by(|a, b| {
    a.x.total_cmp(&b.x)
      .then(a.y.total_cmp(&b.y))
      .then(a.z.total_cmp(&b.z))
  });
  points
}
