//! BestK - bounded accumulator retaining the k lowest-weight items seen.
//!
//! Items are weighted once, on insertion, by a caller-supplied function and
//! kept in ascending weight order. Equal weights keep arrival order, so
//! when several candidates tie for the last slot the earliest ones win.
//!
//! ```
//! use knn_octree::BestK;
//!
//! let mut best = BestK::new(2, |x: &i32| (*x as f64).abs());
//! for x in [5, -1, 3, 2] {
//!   best.add(x);
//! }
//! assert_eq!(best.items().collect::<Vec<_>>(), vec![&-1, &2]);
//! assert_eq!(best.max_weight(), Some(2.0));
//! ```

/// Bounded best-k accumulator ordered nearest (lowest weight) first.
#[derive(Clone)]
pub struct BestK<T, F> {
  capacity: usize,
  weigh: F,
  /// (weight, item), ascending by weight.
  entries: Vec<(f64, T)>,
}

impl<T, F> BestK<T, F>
where
  F: Fn(&T) -> f64,
{
  /// Create an accumulator holding at most `k` items weighted by `weigh`.
  ///
  /// # Panics
  /// Panics if `k` is 0.
  pub fn new(k: usize, weigh: F) -> Self {
    assert!(k > 0, "BestK capacity must be at least 1");
    Self {
      capacity: k,
      weigh,
      entries: Vec::with_capacity(k),
    }
  }

  /// Offer a candidate.
  ///
  /// Below capacity it is always kept. At capacity it is kept only if its
  /// weight is strictly below the current maximum, which is then evicted.
  /// Returns whether the candidate was kept.
  pub fn add(&mut self, item: T) -> bool {
    let weight = (self.weigh)(&item);
    if self.is_full() {
      match self.max_weight() {
        Some(max) if weight < max => {
          self.entries.pop();
        }
        _ => return false,
      }
    }
    let at = self.entries.partition_point(|(w, _)| *w <= weight);
    self.entries.insert(at, (weight, item));
    true
  }

  /// True once `k` items are held.
  #[inline]
  pub fn is_full(&self) -> bool {
    self.entries.len() == self.capacity
  }

  /// Largest weight held, available only once the accumulator is full.
  #[inline]
  pub fn max_weight(&self) -> Option<f64> {
    if self.is_full() {
      self.entries.last().map(|(w, _)| *w)
    } else {
      None
    }
  }

  /// Maximum number of items held.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Number of items currently held.
  #[inline]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Check if nothing has been accepted yet.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Held items, lowest weight first.
  pub fn items(&self) -> impl Iterator<Item = &T> {
    self.entries.iter().map(|(_, item)| item)
  }

  /// Weights of the held items, in the same order as [`items`](Self::items).
  pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
    self.entries.iter().map(|(w, _)| *w)
  }

  /// Consume the accumulator, returning items lowest weight first.
  pub fn into_items(self) -> Vec<T> {
    self.entries.into_iter().map(|(_, item)| item).collect()
  }

  /// Consume the accumulator, returning `(item, weight)` pairs lowest
  /// weight first.
  pub fn into_weighted(self) -> Vec<(T, f64)> {
    self
      .entries
      .into_iter()
      .map(|(w, item)| (item, w))
      .collect()
  }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for BestK<T, F> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BestK")
      .field("capacity", &self.capacity)
      .field("entries", &self.entries)
      .finish()
  }
}

#[cfg(test)]
#[path = "best_k_test.rs"]
mod best_k_test;
