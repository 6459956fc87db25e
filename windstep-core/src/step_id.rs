// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering::SeqCst};

static GLOBAL_STEP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a compiled step.
///
/// Assigned once at construction. A partition clone keeps the id of the step
/// it was cloned from, since both stand for the same position in the
/// traversal; the coordinator relies on this to reduce every clone's partial
/// output under one memory key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(u64);

impl StepId {
    /// Allocates the next id from the global sequence.
    pub fn next() -> Self {
        Self(GLOBAL_STEP_SEQUENCE.fetch_add(1, SeqCst))
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step#{}", self.0)
    }
}
