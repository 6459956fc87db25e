// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use windstep_core::Traverser;

/// The local input of one partition, delivered one batch per superstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    batches: VecDeque<Vec<Traverser<T>>>,
}

impl<T> Partition<T> {
    pub fn from_batches(batches: impl IntoIterator<Item = Vec<Traverser<T>>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    /// A partition that sees all of its input in the first superstep.
    pub fn single(traversers: Vec<Traverser<T>>) -> Self {
        Self::from_batches([traversers])
    }

    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }

    pub(crate) fn next_batch(&mut self) -> Option<Vec<Traverser<T>>> {
        self.batches.pop_front()
    }
}

impl<T> From<Vec<Traverser<T>>> for Partition<T> {
    fn from(traversers: Vec<Traverser<T>>) -> Self {
        Self::single(traversers)
    }
}

/// Deals `traversers` round-robin over `count` single-batch partitions.
///
/// `count` of zero is treated as one.
pub fn round_robin<T>(
    traversers: impl IntoIterator<Item = Traverser<T>>,
    count: usize,
) -> Vec<Partition<T>> {
    let count = count.max(1);
    let mut buckets: Vec<Vec<Traverser<T>>> = (0..count).map(|_| Vec::new()).collect();
    for (index, traverser) in traversers.into_iter().enumerate() {
        buckets[index % count].push(traverser);
    }
    buckets.into_iter().map(Partition::single).collect()
}
