//! Generation buckets for by-level traversal results

use crate::algorithm::lineage::snapshot::IndividualSnapshot;
use serde::Serialize;
use std::cmp::Ordering;

/// Traversal output grouped by generation
///
/// Generation numbering is 1-based: generation 1 holds the root's children
/// (or parents), generation 2 their children (or parents), and so on. The
/// collection grows as the traversal reaches deeper generations; a bucket the
/// traversal never filled reads as empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Generations {
    buckets: Vec<Vec<IndividualSnapshot>>,
}

impl Generations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of generation buckets reached by the traversal
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the traversal reached no generation at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The snapshots in generation `n` (1-based), sorted by name
    ///
    /// Out-of-range generations, including 0, read as empty.
    #[must_use]
    pub fn generation(&self, n: usize) -> &[IndividualSnapshot] {
        if n == 0 {
            return &[];
        }
        self.buckets.get(n - 1).map_or(&[], Vec::as_slice)
    }

    /// Iterate over the buckets from generation 1 upward
    pub fn iter(&self) -> impl Iterator<Item = &[IndividualSnapshot]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Total number of snapshots across all generations
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Insert into generation `n` (1-based), keeping the bucket name-sorted
    ///
    /// Equal keys keep insertion order. Skipped generations materialise as
    /// empty buckets so numbering stays stable.
    pub(crate) fn insert_sorted(&mut self, n: usize, snapshot: IndividualSnapshot) {
        debug_assert!(n > 0, "generation numbering is 1-based");
        let index = n - 1;
        if self.buckets.len() <= index {
            self.buckets.resize_with(index + 1, Vec::new);
        }
        let bucket = &mut self.buckets[index];
        let position = bucket
            .partition_point(|existing| existing.cmp_by_name(&snapshot) != Ordering::Greater);
        bucket.insert(position, snapshot);
    }

    /// Whether any bucket from generation 1 through `n` inclusive already
    /// holds this person
    pub(crate) fn contains_through(&self, n: usize, snapshot: &IndividualSnapshot) -> bool {
        self.buckets
            .iter()
            .take(n)
            .any(|bucket| bucket.iter().any(|existing| existing.same_person(snapshot)))
    }
}
