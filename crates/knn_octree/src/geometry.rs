//! Pure geometric helpers shared by construction and queries.
//!
//! Octant numbering: 0-7 where bits represent the +X, +Y, +Z side of a
//! reference point:
//! - bit 0: X (1 if `point.x > reference.x`)
//! - bit 1: Y
//! - bit 2: Z
//!
//! A coordinate equal to the reference resolves to the 0 side, so every
//! point maps to exactly one octant even when it coincides with the center.

use glam::DVec3;

/// Component-wise arithmetic mean of a point set.
///
/// The caller must pass at least one point; an empty slice yields the
/// origin. Each point is scaled before summing so coordinates near
/// `f64::MAX` do not overflow.
pub fn center(points: &[DVec3]) -> DVec3 {
  let n = points.len() as f64;
  points.iter().fold(DVec3::ZERO, |acc, &pt| acc + pt / n)
}

/// Octant (0-7) of `point` relative to `reference`.
#[inline]
pub fn octant(reference: DVec3, point: DVec3) -> u8 {
  reference.cmplt(point).bitmask() as u8
}

/// Split an octant number into its per-axis bits `[x, y, z]`.
#[inline]
pub fn octant_to_bits(octant: u8) -> [u8; 3] {
  debug_assert!(octant < 8, "octant out of range: {}", octant);
  [octant & 1, (octant >> 1) & 1, (octant >> 2) & 1]
}

/// Inverse of [`octant_to_bits`].
#[inline]
pub fn bits_to_octant(bits: [u8; 3]) -> u8 {
  (bits[0] & 1) | (bits[1] & 1) << 1 | (bits[2] & 1) << 2
}

/// Lower bound on the squared distance from `point` to anything inside
/// `octant` around `center`.
///
/// Only the axes on which `octant` differs from the point's own octant
/// contribute, each by the squared distance from the point to that axis'
/// splitting plane. The point's own octant therefore has a bound of 0.
#[inline]
pub fn octant_lower_bound(center: DVec3, octant: u8, point: DVec3) -> f64 {
  octant_lower_bounds(center, point)[octant as usize]
}

/// [`octant_lower_bound`] for all eight octants at once, indexed by octant.
#[inline]
pub fn octant_lower_bounds(center: DVec3, point: DVec3) -> [f64; 8] {
  let own = octant(center, point);
  let delta = center - point;
  let sq = delta * delta;
  std::array::from_fn(|target| {
    let differing = own ^ target as u8;
    let mut bound = 0.0;
    for axis in 0..3 {
      if differing & (1 << axis) != 0 {
        bound += sq[axis];
      }
    }
    bound
  })
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
