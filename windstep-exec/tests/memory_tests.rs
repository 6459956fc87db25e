// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use windstep_core::{DistributedMergeable, Step, StepId, WindstepError};
use windstep_exec::Memory;
use windstep_ops::{RangeWindowStep, TailWindowStep};
use windstep_test_utils::{set_of, values};

#[test]
fn test_add_folds_with_registered_operator() -> anyhow::Result<()> {
    // Arrange
    let step = TailWindowStep::<u32>::new(3);
    let key = step.merge_operator().expect("tail is mergeable");
    let memory = Memory::new();
    memory.register(key);

    // Act
    memory.add(step.id(), set_of([1, 2]))?;
    memory.add(step.id(), set_of([3, 4]))?;
    memory.add(step.id(), set_of([5]))?;

    // Assert - the third partial arrives once the seed already holds 4 >= 3 entries
    assert_eq!(memory.len_of(step.id()), Some(4));
    assert_eq!(values(memory.take(step.id())?), vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_add_under_unknown_key_is_rejected() {
    let memory = Memory::<u32>::new();
    let stray = StepId::from_raw(u64::MAX);

    let err = memory.add(stray, set_of([1])).unwrap_err();

    assert_eq!(err, WindstepError::UnknownMemoryKey { step_id: stray });
    assert!(!err.is_configuration_error());
}

#[test]
fn test_take_removes_slot() -> anyhow::Result<()> {
    // Arrange
    let step = RangeWindowStep::<u32>::new(0, 10)?;
    let memory = Memory::new();
    memory.register(step.merge_operator().expect("range is mergeable"));
    memory.add(step.id(), set_of([7]))?;

    // Act
    let first = memory.take(step.id())?;
    let second = memory.take(step.id());

    // Assert
    assert_eq!(values(first), vec![7]);
    assert_eq!(
        second.unwrap_err(),
        WindstepError::UnknownMemoryKey { step_id: step.id() }
    );
    assert_eq!(memory.len_of(step.id()), None);
    Ok(())
}

#[test]
fn test_register_again_starts_over() -> anyhow::Result<()> {
    let step = RangeWindowStep::<u32>::new(0, 10)?;
    let memory = Memory::new();
    memory.register(step.merge_operator().expect("range is mergeable"));
    memory.add(step.id(), set_of([1, 2, 3]))?;

    memory.register(step.merge_operator().expect("range is mergeable"));

    assert_eq!(memory.len_of(step.id()), Some(0));
    Ok(())
}

#[test]
fn test_slots_are_independent_per_step() -> anyhow::Result<()> {
    // Arrange
    let range = RangeWindowStep::<u32>::new(0, 1)?;
    let tail = TailWindowStep::<u32>::new(10);
    let memory = Memory::new();
    memory.register(range.merge_operator().expect("range is mergeable"));
    memory.register(tail.merge_operator().expect("tail is mergeable"));

    // Act
    for partial in [set_of([1]), set_of([2])] {
        memory.add(range.id(), partial.clone())?;
        memory.add(tail.id(), partial)?;
    }

    // Assert
    assert_eq!(values(memory.take(range.id())?), vec![1]);
    assert_eq!(values(memory.take(tail.id())?), vec![1, 2]);
    Ok(())
}

#[test]
fn test_concurrent_adds_are_all_folded() -> anyhow::Result<()> {
    // Arrange
    let step = RangeWindowStep::<u32>::new(0, -1)?;
    let memory = Memory::new();
    memory.register(step.merge_operator().expect("range is mergeable"));
    let id = step.id();

    // Act
    std::thread::scope(|scope| {
        for worker in 0..4u32 {
            let memory = &memory;
            scope.spawn(move || {
                for item in 0..25u32 {
                    memory
                        .add(id, set_of([worker * 100 + item]))
                        .expect("key is registered");
                }
            });
        }
    });

    // Assert
    assert_eq!(memory.take(id)?.len(), 100);
    Ok(())
}
