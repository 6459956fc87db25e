// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Count-capped merge operators for the window steps.
//!
//! Both operators append a partition's partial output to the running seed
//! only while the seed holds fewer *entries* than the window bound. The bound
//! itself is a bulk quantity, so under non-unit bulk a seed can stop accepting
//! input while still short of the bulk the window needs, or accept entries
//! whose bulk goes far beyond it. Finalization re-applies the window to
//! whatever was gathered.

use windstep_core::{MergeOperator, TraverserSet};

fn append_while_below<T>(
    mut seed: TraverserSet<T>,
    other: TraverserSet<T>,
    cap: Option<u64>,
) -> TraverserSet<T> {
    let below = cap.map_or(true, |cap| (seed.len() as u64) < cap);
    if below {
        seed.append(other);
    } else if !other.is_empty() {
        windstep_core::debug!(
            "seed of {} entries reached cap {:?}, discarding {} entries",
            seed.len(),
            cap,
            other.len()
        );
    }
    seed
}

/// Merge operator of [`RangeWindowStep`](crate::RangeWindowStep).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMergeOperator {
    high: Option<u64>,
}

impl RangeMergeOperator {
    /// `None` never caps: every partial output is kept.
    pub const fn new(high: Option<u64>) -> Self {
        Self { high }
    }

    pub const fn high(&self) -> Option<u64> {
        self.high
    }
}

impl<T> MergeOperator<T> for RangeMergeOperator {
    fn merge(&self, seed: TraverserSet<T>, other: TraverserSet<T>) -> TraverserSet<T> {
        append_while_below(seed, other, self.high)
    }
}

/// Merge operator of [`TailWindowStep`](crate::TailWindowStep).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailMergeOperator {
    limit: u64,
}

impl TailMergeOperator {
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

impl<T> MergeOperator<T> for TailMergeOperator {
    fn merge(&self, seed: TraverserSet<T>, other: TraverserSet<T>) -> TraverserSet<T> {
        append_while_below(seed, other, Some(self.limit))
    }
}
