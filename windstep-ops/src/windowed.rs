// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull adapter that drives a [`Step`] from an upstream iterator.

use crate::range::RangeWindowStep;
use crate::tail::TailWindowStep;
use windstep_core::{Result, Step, Traverser};

/// An iterator that yields whatever its step produces from `upstream`.
///
/// Each `next()` is one pull on the step. The step stays reachable through
/// [`step_mut`](Self::step_mut), so the owning traversal can toggle bypass or
/// reset it between pulls.
#[derive(Debug)]
pub struct Windowed<I, S> {
    upstream: I,
    step: S,
}

impl<I, S> Windowed<I, S> {
    pub const fn new(upstream: I, step: S) -> Self {
        Self { upstream, step }
    }

    pub const fn step(&self) -> &S {
        &self.step
    }

    pub fn step_mut(&mut self) -> &mut S {
        &mut self.step
    }

    pub fn into_parts(self) -> (I, S) {
        (self.upstream, self.step)
    }
}

impl<I, S, T> Iterator for Windowed<I, S>
where
    I: Iterator<Item = Traverser<T>>,
    S: Step<T>,
{
    type Item = Traverser<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step.process_next(&mut self.upstream)
    }
}

/// Extension trait attaching windowing steps to any traverser iterator.
pub trait WindowStepExt<T>: Iterator<Item = Traverser<T>> + Sized {
    /// Keeps the bulk positions `[low, high)`; `high = -1` is unbounded.
    ///
    /// # Errors
    ///
    /// Fails with [`WindstepError::InvalidRange`](windstep_core::WindstepError::InvalidRange)
    /// when the bounds describe no legal window.
    fn range_window(self, low: i64, high: i64) -> Result<Windowed<Self, RangeWindowStep<T>>> {
        Ok(Windowed::new(self, RangeWindowStep::new(low, high)?))
    }

    /// Keeps the last `limit` bulk of the stream. Consumes the whole upstream
    /// on the first pull.
    fn tail_window(self, limit: u64) -> Windowed<Self, TailWindowStep<T>> {
        Windowed::new(self, TailWindowStep::new(limit))
    }

    /// Runs this iterator through an already-built step.
    fn through<S: Step<T>>(self, step: S) -> Windowed<Self, S> {
        Windowed::new(self, step)
    }
}

impl<I, T> WindowStepExt<T> for I where I: Iterator<Item = Traverser<T>> {}
