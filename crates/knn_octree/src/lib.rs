//! knn_octree - exact k-nearest-neighbor search over static 3-D point sets
//!
//! Points are partitioned recursively around the centroid of each node,
//! producing an octree whose shape follows the point distribution rather
//! than a fixed cube subdivision. Queries walk the tree branch-and-bound
//! style, visiting octants in order of a per-octant lower bound on the
//! squared distance and skipping any octant that cannot beat the current
//! k-th best candidate.
//!
//! # Features
//!
//! - **Centroid octree**: built once from a point set, immutable afterwards
//!   and shareable across threads for concurrent queries
//! - **Exact k-NN**: results match a brute-force scan under squared
//!   Euclidean distance, nearest first
//! - **Parallel construction**: large subtrees are built on the rayon pool
//! - **Tracing**: optional `tracing` feature instruments build and query
//!
//! # Example
//!
//! ```
//! use knn_octree::Octree;
//!
//! let tree = Octree::new([
//!   [0.0, 0.0, 0.0],
//!   [1.0, 0.0, 0.0],
//!   [0.0, 2.0, 0.0],
//!   [5.0, 5.0, 5.0],
//!   [-3.0, 1.0, 0.5],
//! ])?;
//!
//! let nearest = tree.nearest(2, [0.1, 0.0, 0.0])?;
//! assert_eq!(nearest.len(), 2);
//! assert_eq!(nearest[0].to_array(), [0.0, 0.0, 0.0]);
//! assert_eq!(nearest[1].to_array(), [1.0, 0.0, 0.0]);
//! # Ok::<(), knn_octree::OctreeError>(())
//! ```

pub mod best_k;
pub mod error;
pub mod geometry;
pub mod octree;

// Re-export commonly used items
pub use best_k::BestK;
pub use error::OctreeError;
pub use geometry::{
  bits_to_octant, center, octant, octant_lower_bound, octant_lower_bounds, octant_to_bits,
};
pub use glam::DVec3;
pub use octree::{Branches, Octree, OctreeConfig, OctreeNode, QueryStats};
