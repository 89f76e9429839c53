//! Traversal counters for a single nearest-neighbor query.

/// Statistics from one k-NN traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
  /// Nodes entered, leaves included.
  pub nodes_visited: usize,
  /// Leaves whose points were offered to the accumulator.
  pub leaves_visited: usize,
  /// Points offered to the accumulator.
  pub points_tested: usize,
  /// Non-empty octants skipped by the lower-bound test.
  pub octants_pruned: usize,
  /// Octants skipped because no child exists there.
  pub empty_octants_skipped: usize,
}

impl QueryStats {
  /// Fold another traversal's counters into this one.
  pub fn merge(&mut self, other: &QueryStats) {
    self.nodes_visited += other.nodes_visited;
    self.leaves_visited += other.leaves_visited;
    self.points_tested += other.points_tested;
    self.octants_pruned += other.octants_pruned;
    self.empty_octants_skipped += other.empty_octants_skipped;
  }
}
