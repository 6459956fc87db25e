// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The contract every windowing step exposes to the surrounding engine.

use crate::merge::MemoryComputeKey;
use crate::step_id::StepId;
use crate::traverser::Traverser;
use crate::traverser_set::TraverserSet;
use std::collections::BTreeSet;

/// Traverser properties a step depends on.
///
/// The engine uses these to decide what it must preserve upstream. A step that
/// declares [`Bulk`](Self::Bulk) reads and rewrites multiplicities, so the
/// engine may not flatten bulked traversers into unit copies or drop bulk
/// bookkeeping before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum TraverserRequirement {
    Bulk,
}

/// A pull-driven pipeline stage.
///
/// A step does not own its upstream. Each call to
/// [`process_next`](Self::process_next) borrows the upstream iterator, pulls
/// zero or more traversers from it, and returns at most one traverser for
/// downstream. `None` is ordinary exhaustion, never a fault.
///
/// Configuration is fixed at construction. Progress state belongs to one
/// execution instance: [`reset`](Self::reset) restores it to construction-time
/// defaults, and [`fresh_clone`](Self::fresh_clone) creates an instance with
/// the same configuration and new, unshared state.
pub trait Step<T> {
    fn id(&self) -> StepId;

    /// Pulls the next output traverser, or `None` once this step is exhausted.
    fn process_next(
        &mut self,
        upstream: &mut dyn Iterator<Item = Traverser<T>>,
    ) -> Option<Traverser<T>>;

    /// Clears progress state. Safe to call at any point, including mid-stream.
    fn reset(&mut self);

    /// Returns an instance with identical configuration and fresh progress state.
    ///
    /// Mutating the clone never affects `self`, and the other way round. The
    /// clone keeps `self`'s [`StepId`].
    fn fresh_clone(&self) -> Self
    where
        Self: Sized;

    fn requirements(&self) -> BTreeSet<TraverserRequirement>;

    /// Whether the step must exhaust its upstream before its first emission.
    fn is_barrier(&self) -> bool {
        false
    }
}

/// Steps that must be able to run through partitions and be reduced afterwards.
pub trait DistributedMergeable<T>: Step<T> {
    /// The key, combiner and initial state under which partition outputs of
    /// this step are reduced, or `None` if partial outputs cannot be merged.
    fn merge_operator(&self) -> Option<MemoryComputeKey<T>>;

    /// The instance a partition runs over its local input.
    ///
    /// Its partial output, merged with the other partitions' and handed to
    /// [`finalize`](Self::finalize), must still contain everything the
    /// sequential run would emit. Steps whose window is only meaningful on
    /// the whole stream override this to window less eagerly. Defaults to
    /// [`fresh_clone`](Step::fresh_clone).
    fn partition_clone(&self) -> Self
    where
        Self: Sized,
    {
        self.fresh_clone()
    }

    /// Produces the authoritative output from a gathered partial result.
    ///
    /// The step is reset and `gathered` is fed back through its own
    /// [`process_next`](Step::process_next), so single-process windowing stays
    /// the one source of truth for what ends up in the result.
    fn finalize(&mut self, gathered: TraverserSet<T>) -> TraverserSet<T> {
        self.reset();
        let mut upstream = gathered.into_iter();
        let mut result = TraverserSet::new();
        while let Some(traverser) = self.process_next(&mut upstream) {
            result.push(traverser);
        }
        result
    }
}
