// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::range::RangeWindowStep;
use crate::tail::TailWindowStep;
use core::fmt;
use std::collections::BTreeSet;
use windstep_core::{
    BypassMode, Bypassing, DistributedMergeable, MemoryComputeKey, Step, StepId, Traverser,
    TraverserRequirement,
};

/// The closed set of windowing steps, for callers that pick one at runtime.
#[derive(Debug)]
pub enum WindowStep<T> {
    Range(RangeWindowStep<T>),
    Tail(TailWindowStep<T>),
}

impl<T> From<RangeWindowStep<T>> for WindowStep<T> {
    fn from(step: RangeWindowStep<T>) -> Self {
        Self::Range(step)
    }
}

impl<T> From<TailWindowStep<T>> for WindowStep<T> {
    fn from(step: TailWindowStep<T>) -> Self {
        Self::Tail(step)
    }
}

impl<T> Step<T> for WindowStep<T> {
    fn id(&self) -> StepId {
        match self {
            Self::Range(step) => step.id(),
            Self::Tail(step) => step.id(),
        }
    }

    fn process_next(
        &mut self,
        upstream: &mut dyn Iterator<Item = Traverser<T>>,
    ) -> Option<Traverser<T>> {
        match self {
            Self::Range(step) => step.process_next(upstream),
            Self::Tail(step) => step.process_next(upstream),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Range(step) => step.reset(),
            Self::Tail(step) => step.reset(),
        }
    }

    fn fresh_clone(&self) -> Self {
        match self {
            Self::Range(step) => Self::Range(step.fresh_clone()),
            Self::Tail(step) => Self::Tail(step.fresh_clone()),
        }
    }

    fn requirements(&self) -> BTreeSet<TraverserRequirement> {
        match self {
            Self::Range(step) => step.requirements(),
            Self::Tail(step) => step.requirements(),
        }
    }

    fn is_barrier(&self) -> bool {
        match self {
            Self::Range(step) => step.is_barrier(),
            Self::Tail(step) => step.is_barrier(),
        }
    }
}

impl<T> Bypassing for WindowStep<T> {
    fn set_bypass(&mut self, bypass: bool) {
        match self {
            Self::Range(step) => step.set_bypass(bypass),
            Self::Tail(step) => step.set_bypass(bypass),
        }
    }

    fn bypass_mode(&self) -> BypassMode {
        match self {
            Self::Range(step) => step.bypass_mode(),
            Self::Tail(step) => step.bypass_mode(),
        }
    }
}

impl<T> DistributedMergeable<T> for WindowStep<T> {
    fn merge_operator(&self) -> Option<MemoryComputeKey<T>> {
        match self {
            Self::Range(step) => step.merge_operator(),
            Self::Tail(step) => step.merge_operator(),
        }
    }

    fn partition_clone(&self) -> Self {
        match self {
            Self::Range(step) => Self::Range(step.partition_clone()),
            Self::Tail(step) => Self::Tail(step.partition_clone()),
        }
    }
}

impl<T> fmt::Display for WindowStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(step) => fmt::Display::fmt(step, f),
            Self::Tail(step) => fmt::Display::fmt(step, f),
        }
    }
}
