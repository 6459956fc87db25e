// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Coordinator-side reduction state, one slot per registered step.

use parking_lot::Mutex;
use std::collections::HashMap;
use windstep_core::{MemoryComputeKey, Result, StepId, TraverserSet, WindstepError};

struct Slot<T> {
    key: MemoryComputeKey<T>,
    value: TraverserSet<T>,
}

/// Reduced partial outputs keyed by step.
///
/// Every [`add`](Self::add) folds a partial output into the slot's running
/// value with that slot's merge operator. Partial outputs for a step that
/// was never registered are rejected rather than dropped.
pub struct Memory<T> {
    slots: Mutex<HashMap<StepId, Slot<T>>>,
}

impl<T> Memory<T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Registers `key`, starting its slot from the key's initial state.
    /// Re-registering a step starts it over.
    pub fn register(&self, key: MemoryComputeKey<T>) {
        let value = key.initial();
        self.slots.lock().insert(key.step_id(), Slot { key, value });
    }

    /// # Errors
    ///
    /// Returns [`WindstepError::UnknownMemoryKey`] if `step_id` was never registered.
    pub fn add(&self, step_id: StepId, partial: TraverserSet<T>) -> Result<()> {
        let mut slots = self.slots.lock();
        let slot = slots
            .get_mut(&step_id)
            .ok_or(WindstepError::UnknownMemoryKey { step_id })?;

        let seed = core::mem::take(&mut slot.value);
        slot.value = slot.key.reduce(seed, partial);
        windstep_core::trace!("{} now holds {} entries", step_id, slot.value.len());
        Ok(())
    }

    /// Number of entries currently reduced for `step_id`.
    pub fn len_of(&self, step_id: StepId) -> Option<usize> {
        self.slots.lock().get(&step_id).map(|slot| slot.value.len())
    }

    /// Removes the slot and hands back its reduced value.
    ///
    /// # Errors
    ///
    /// Returns [`WindstepError::UnknownMemoryKey`] if `step_id` was never registered.
    pub fn take(&self, step_id: StepId) -> Result<TraverserSet<T>> {
        self.slots
            .lock()
            .remove(&step_id)
            .map(|slot| slot.value)
            .ok_or(WindstepError::UnknownMemoryKey { step_id })
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self::new()
    }
}
