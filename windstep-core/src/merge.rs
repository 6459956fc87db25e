// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reduction of partial outputs gathered from partition clones.

use crate::step_id::StepId;
use crate::traverser_set::TraverserSet;
use alloc::sync::Arc;
use core::fmt;

/// Combines two partial output collections of the same step.
///
/// `seed` is the running accumulation and is handed back, possibly extended.
/// Implementations must not depend on which partition produced `other`.
pub trait MergeOperator<T>: Send + Sync {
    fn merge(&self, seed: TraverserSet<T>, other: TraverserSet<T>) -> TraverserSet<T>;
}

/// Everything a coordinator needs to reduce one step's partial outputs.
pub struct MemoryComputeKey<T> {
    step_id: StepId,
    operator: Arc<dyn MergeOperator<T>>,
    transient: bool,
}

impl<T> MemoryComputeKey<T> {
    /// Creates a transient key: the reduced value is consumed by finalization
    /// and not kept around as a side-effect of the traversal.
    pub fn new(step_id: StepId, operator: impl MergeOperator<T> + 'static) -> Self {
        Self {
            step_id,
            operator: Arc::new(operator),
            transient: true,
        }
    }

    pub const fn step_id(&self) -> StepId {
        self.step_id
    }

    /// The empty seed every reduction starts from.
    pub fn initial(&self) -> TraverserSet<T> {
        TraverserSet::new()
    }

    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    pub fn reduce(&self, seed: TraverserSet<T>, other: TraverserSet<T>) -> TraverserSet<T> {
        self.operator.merge(seed, other)
    }
}

impl<T> Clone for MemoryComputeKey<T> {
    fn clone(&self) -> Self {
        Self {
            step_id: self.step_id,
            operator: Arc::clone(&self.operator),
            transient: self.transient,
        }
    }
}

impl<T> fmt::Debug for MemoryComputeKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryComputeKey")
            .field("step_id", &self.step_id)
            .field("transient", &self.transient)
            .finish_non_exhaustive()
    }
}
