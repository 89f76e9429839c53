//! Centroid octree for exact k-nearest-neighbor queries.
//!
//! Unlike a classic octree with fixed cube subdivision, each node splits
//! around the centroid of its own points, so the partition adapts to the
//! point distribution.
//!
//! # Module Structure
//!
//! - [`config`]: `OctreeConfig` - leaf capacity and parallel build threshold
//! - [`node`]: `OctreeNode` - recursive construction and structure access
//! - [`query`]: branch-and-bound k-NN traversal over `OctreeNode`
//! - [`stats`]: `QueryStats` - per-query traversal counters
//! - [`tree`]: `Octree` - validated facade owning the root

pub mod config;
pub mod node;
pub mod query;
pub mod stats;
pub mod tree;

// Test utilities
#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use config::OctreeConfig;
pub use node::{Branches, LeafBucket, OctreeNode};
pub use stats::QueryStats;
pub use tree::Octree;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
