// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Global range window: skip the first `low` tokens, stop after `high`.
//!
//! Positions are counted by bulk, not by traverser. A single traverser whose
//! bulk straddles a boundary is cut down in place so that exactly the part
//! inside `[low, high)` is emitted.
//!
//! # Examples
//!
//! ```rust
//! use windstep_core::Traverser;
//! use windstep_ops::WindowStepExt;
//!
//! let emitted: Vec<u64> = vec![Traverser::with_bulk("marko", 10)]
//!     .into_iter()
//!     .range_window(3, 7)
//!     .unwrap()
//!     .map(|t| t.bulk())
//!     .collect();
//!
//! assert_eq!(emitted, vec![4]);
//! ```

use crate::merge::RangeMergeOperator;
use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU64, Ordering};
use std::collections::BTreeSet;
use windstep_core::{
    BypassMode, Bypassing, DistributedMergeable, MemoryComputeKey, Result, Step, StepId,
    Traverser, TraverserRequirement, WindstepError,
};

/// What the range window decided for one incoming bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The window's upper bound was already reached; nothing more is pulled.
    Exhausted,
    /// The whole bulk lies before `low`.
    BeforeWindow,
    /// The bulk reached into the window but nothing is left once both ends
    /// are cut off. Happens only when `low == high`.
    Suppressed,
    /// Emit the traverser with this (non-zero) bulk.
    Emit(u64),
}

/// Non-barrier streaming filter keeping the bulk positions `[low, high)`.
#[derive(Debug)]
pub struct RangeWindowStep<T> {
    id: StepId,
    low: u64,
    high: Option<u64>,
    counter: AtomicU64,
    bypass: BypassMode,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RangeWindowStep<T> {
    /// Builds a range window from engine-style bounds.
    ///
    /// `high = -1` leaves the window unbounded above, `low = -1` is the same as
    /// `0`.
    ///
    /// # Errors
    ///
    /// Returns [`WindstepError::InvalidRange`] if both bounds are finite and
    /// `low > high`, or if either bound is below `-1`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low < -1 || high < -1 || (low != -1 && high != -1 && low > high) {
            return Err(WindstepError::invalid_range(low, high));
        }

        Ok(Self {
            id: StepId::next(),
            low: u64::try_from(low).unwrap_or(0),
            high: u64::try_from(high).ok(),
            counter: AtomicU64::new(0),
            bypass: BypassMode::Active,
            _marker: PhantomData,
        })
    }

    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Upper bound, `None` when unbounded.
    pub const fn high(&self) -> Option<u64> {
        self.high
    }

    /// Bulk positions consumed so far, at or below the current boundary.
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    pub fn is_exhausted(&self) -> bool {
        self.high.is_some_and(|high| self.position() >= high)
    }

    /// Decides how much of `avail` falls inside the window and advances the
    /// position accordingly.
    ///
    /// Takes `&self`: the check and the advance commit together through a
    /// compare-and-swap, so concurrent callers sharing one step never lose an
    /// update or both claim the same slot.
    pub fn admit(&self, avail: u64) -> Admission {
        let mut current = self.counter.load(Ordering::Acquire);
        loop {
            if self.high.is_some_and(|high| current >= high) {
                return Admission::Exhausted;
            }

            let (advance, admission) = if current.saturating_add(avail) <= self.low {
                (avail, Admission::BeforeWindow)
            } else {
                let to_skip = self.low.saturating_sub(current);
                let to_trim = self
                    .high
                    .map_or(0, |high| current.saturating_add(avail).saturating_sub(high));
                let to_emit = avail - to_skip - to_trim;
                // The trimmed tail is never counted: the position stops at `high`.
                let admission = if to_emit == 0 {
                    Admission::Suppressed
                } else {
                    Admission::Emit(to_emit)
                };
                (to_skip + to_emit, admission)
            };

            match self.counter.compare_exchange_weak(
                current,
                current + advance,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return admission,
                Err(actual) => current = actual,
            }
        }
    }
}

impl<T> Step<T> for RangeWindowStep<T> {
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

        loop {
            if self.is_exhausted() {
                windstep_core::debug!("{} reached its upper bound", self);
                return None;
            }

            let mut traverser = upstream.next()?;
            match self.admit(traverser.bulk()) {
                Admission::Exhausted => return None,
                Admission::BeforeWindow => {}
                Admission::Suppressed => {
                    windstep_core::trace!("{} dropped a zero-bulk remainder", self);
                }
                Admission::Emit(bulk) => {
                    traverser.set_bulk(bulk);
                    return Some(traverser);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.counter.store(0, Ordering::Release);
    }

    fn fresh_clone(&self) -> Self {
        Self {
            id: self.id,
            low: self.low,
            high: self.high,
            counter: AtomicU64::new(0),
            bypass: self.bypass,
            _marker: PhantomData,
        }
    }

    fn requirements(&self) -> BTreeSet<TraverserRequirement> {
        BTreeSet::from([TraverserRequirement::Bulk])
    }
}

impl<T> Bypassing for RangeWindowStep<T> {
    fn set_bypass(&mut self, bypass: bool) {
        self.bypass = BypassMode::from_flag(bypass);
    }

    fn bypass_mode(&self) -> BypassMode {
        self.bypass
    }
}

impl<T> DistributedMergeable<T> for RangeWindowStep<T> {
    fn merge_operator(&self) -> Option<MemoryComputeKey<T>> {
        Some(MemoryComputeKey::new(self.id, RangeMergeOperator::new(self.high)))
    }

    /// A clone that keeps everything up to `high`.
    ///
    /// A partition cannot know how many tokens precede its own input, so
    /// skipping `low` locally would drop tokens the sequential run keeps.
    /// `low` is applied once, by [`finalize`](DistributedMergeable::finalize).
    fn partition_clone(&self) -> Self {
        Self {
            low: 0,
            ..self.fresh_clone()
        }
    }
}

impl<T> fmt::Display for RangeWindowStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "RangeWindowStep({},{})", self.low, high),
            None => write!(f, "RangeWindowStep({},-1)", self.low),
        }
    }
}
