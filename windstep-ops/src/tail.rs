// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Global tail window: keep the last `limit` tokens of the stream.
//!
//! This is a barrier. The first pull drains the entire upstream into a buffer
//! that never holds more bulk than it needs: the oldest entry is evicted as
//! soon as the newer ones alone cover `limit`. The oldest survivor may still
//! carry more than needed, so it is trimmed when it is emitted.
//!
//! # Examples
//!
//! ```rust
//! use windstep_core::Traverser;
//! use windstep_ops::WindowStepExt;
//!
//! let last: Vec<i32> = (1..=10)
//!     .map(Traverser::new)
//!     .tail_window(3)
//!     .map(Traverser::into_inner)
//!     .collect();
//!
//! assert_eq!(last, vec![8, 9, 10]);
//! ```

use crate::merge::TailMergeOperator;
use core::fmt;
use std::collections::{BTreeSet, VecDeque};
use windstep_core::{
    BypassMode, Bypassing, DistributedMergeable, MemoryComputeKey, Step, StepId, Traverser,
    TraverserRequirement,
};

/// Barrier step emitting the last `limit` bulk of its upstream, oldest first.
#[derive(Debug)]
pub struct TailWindowStep<T> {
    id: StepId,
    limit: u64,
    tail: VecDeque<Traverser<T>>,
    // Always the sum of bulk across `tail`.
    tail_bulk: u64,
    bypass: BypassMode,
}

impl<T> TailWindowStep<T> {
    pub fn new(limit: u64) -> Self {
        Self {
            id: StepId::next(),
            limit,
            tail: VecDeque::new(),
            tail_bulk: 0,
            bypass: BypassMode::Active,
        }
    }

    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of traversers currently buffered.
    pub fn buffered(&self) -> usize {
        self.tail.len()
    }

    pub const fn tail_bulk(&self) -> u64 {
        self.tail_bulk
    }

    fn add_tail(&mut self, start: Traverser<T>) {
        self.tail_bulk += start.bulk();
        self.tail.push_back(start);

        while let Some(oldest) = self.tail.front() {
            let bulk = oldest.bulk();
            if self.tail_bulk - bulk < self.limit {
                break;
            }
            self.tail.pop_front();
            self.tail_bulk -= bulk;
        }
    }
}

impl<T> Step<T> for TailWindowStep<T> {
    fn id(&self) -> StepId {
        self.id
    }

    fn process_next(
        &mut self,
        upstream: &mut dyn Iterator<Item = Traverser<T>>,
    ) -> Option<Traverser<T>> {
        if self.bypass.is_bypassed() {
            return upstream.next();
        }

        // Nothing can be emitted until everything upstream has been seen.
        for start in &mut *upstream {
            self.add_tail(start);
        }
        windstep_core::trace!(
            "{} holds {} traversers with bulk {}",
            self,
            self.tail.len(),
            self.tail_bulk
        );

        loop {
            let mut oldest = self.tail.pop_front()?;
            let bulk = oldest.bulk();
            let excess = self.tail_bulk.saturating_sub(self.limit);
            if excess > 0 {
                oldest.set_bulk(bulk.saturating_sub(excess));
            }
            // Trimmed and emitted parts both leave the buffer.
            self.tail_bulk -= bulk;

            if !oldest.is_dead() {
                return Some(oldest);
            }
            windstep_core::trace!("{} dropped a zero-bulk remainder", self);
        }
    }

    fn reset(&mut self) {
        self.tail.clear();
        self.tail_bulk = 0;
    }

    fn fresh_clone(&self) -> Self {
        Self {
            id: self.id,
            limit: self.limit,
            tail: VecDeque::new(),
            tail_bulk: 0,
            bypass: self.bypass,
        }
    }

    fn requirements(&self) -> BTreeSet<TraverserRequirement> {
        BTreeSet::from([TraverserRequirement::Bulk])
    }

    fn is_barrier(&self) -> bool {
        true
    }
}

impl<T> Bypassing for TailWindowStep<T> {
    fn set_bypass(&mut self, bypass: bool) {
        self.bypass = BypassMode::from_flag(bypass);
    }

    fn bypass_mode(&self) -> BypassMode {
        self.bypass
    }
}

impl<T> DistributedMergeable<T> for TailWindowStep<T> {
    fn merge_operator(&self) -> Option<MemoryComputeKey<T>> {
        Some(MemoryComputeKey::new(self.id, TailMergeOperator::new(self.limit)))
    }
}

impl<T> fmt::Display for TailWindowStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TailWindowStep({})", self.limit)
    }
}
