// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Gathered partial output exchanged between partitions and the coordinator.

use crate::traverser::Traverser;

/// Insertion-ordered collection of traversers.
///
/// Equal payloads are kept as separate entries; nothing is coalesced. Merge
/// operators cap on [`len`](Self::len), the number of retained entries, which
/// is not the same quantity as [`total_bulk`](Self::total_bulk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraverserSet<T> {
    items: Vec<Traverser<T>>,
}

impl<T> TraverserSet<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, traverser: Traverser<T>) {
        self.items.push(traverser);
    }

    /// Number of retained entries, regardless of their bulk.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of bulk across all entries.
    pub fn total_bulk(&self) -> u64 {
        self.items.iter().map(Traverser::bulk).sum()
    }

    /// Appends every entry of `other`, keeping its order.
    pub fn append(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Traverser<T>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Traverser<T>] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Traverser<T>> {
        self.items
    }
}

impl<T> Default for TraverserSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Traverser<T>>> for TraverserSet<T> {
    fn from(items: Vec<Traverser<T>>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<Traverser<T>> for TraverserSet<T> {
    fn from_iter<I: IntoIterator<Item = Traverser<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Traverser<T>> for TraverserSet<T> {
    fn extend<I: IntoIterator<Item = Traverser<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for TraverserSet<T> {
    type Item = Traverser<T>;
    type IntoIter = std::vec::IntoIter<Traverser<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TraverserSet<T> {
    type Item = &'a Traverser<T>;
    type IntoIter = core::slice::Iter<'a, Traverser<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
