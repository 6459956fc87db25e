// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::Cell;
use std::rc::Rc;
use windstep_core::{Traverser, TraverserSet};

/// Unit-bulk traversers over `values`, in order.
pub fn traversers<T>(values: impl IntoIterator<Item = T>) -> Vec<Traverser<T>> {
    values.into_iter().map(Traverser::new).collect()
}

/// Traversers from `(value, bulk)` pairs, in order.
pub fn bulked<T>(pairs: impl IntoIterator<Item = (T, u64)>) -> Vec<Traverser<T>> {
    pairs
        .into_iter()
        .map(|(value, bulk)| Traverser::with_bulk(value, bulk))
        .collect()
}

pub fn set_of<T>(values: impl IntoIterator<Item = T>) -> TraverserSet<T> {
    traversers(values).into()
}

pub fn values<T>(output: impl IntoIterator<Item = Traverser<T>>) -> Vec<T> {
    output.into_iter().map(Traverser::into_inner).collect()
}

pub fn pairs<T>(output: impl IntoIterator<Item = Traverser<T>>) -> Vec<(T, u64)> {
    output.into_iter().map(Traverser::into_parts).collect()
}

/// Panics if any traverser in `output` is dead.
pub fn assert_no_dead_traversers<'a, T: 'a + std::fmt::Debug>(
    output: impl IntoIterator<Item = &'a Traverser<T>>,
) {
    for traverser in output {
        assert!(
            traverser.bulk() > 0,
            "zero-bulk traverser emitted: {traverser:?}"
        );
    }
}

/// Wraps an upstream iterator and counts how many items were pulled from it.
pub struct PullCounter<I> {
    inner: I,
    pulled: Rc<Cell<usize>>,
}

impl<I> PullCounter<I> {
    /// Returns the wrapped iterator and a handle that reads the pull count.
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> (Self, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        (
            Self {
                inner: inner.into_iter(),
                pulled: Rc::clone(&pulled),
            },
            pulled,
        )
    }
}

impl<I: Iterator> Iterator for PullCounter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(item)
    }
}
