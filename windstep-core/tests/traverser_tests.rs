// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use windstep_core::{Traverser, TraverserSet};

#[test]
fn test_new_traverser_has_unit_bulk() {
    let traverser = Traverser::new("lop");

    assert_eq!(traverser.bulk(), 1);
    assert!(!traverser.is_dead());
    assert_eq!(*traverser, "lop");
}

#[test]
fn test_set_bulk_to_zero_marks_dead() {
    let mut traverser = Traverser::with_bulk(1, 3);

    traverser.set_bulk(0);

    assert!(traverser.is_dead());
}

#[test]
fn test_split_moves_bulk() {
    let mut traverser = Traverser::with_bulk("josh", 7);

    let part = traverser.split(3);

    assert_eq!(part.bulk(), 3);
    assert_eq!(traverser.bulk(), 4);
    assert_eq!(part.get(), traverser.get());
}

#[test]
fn test_split_clamps_to_available_bulk() {
    let mut traverser = Traverser::with_bulk("josh", 2);

    let part = traverser.split(10);

    assert_eq!(part.bulk(), 2);
    assert!(traverser.is_dead());
}

#[test]
fn test_display_shows_value_and_bulk() {
    assert_eq!(Traverser::with_bulk("ripple", 4).to_string(), "ripplex4");
}

#[test]
fn test_set_len_counts_entries_not_bulk() {
    let set: TraverserSet<_> = vec![
        Traverser::with_bulk('a', 5),
        Traverser::with_bulk('a', 5),
        Traverser::new('b'),
    ]
    .into();

    assert_eq!(set.len(), 3);
    assert_eq!(set.total_bulk(), 11);
}

#[test]
fn test_set_append_preserves_order() {
    let mut seed: TraverserSet<_> = (1..=2).map(Traverser::new).collect();
    let other: TraverserSet<_> = (3..=4).map(Traverser::new).collect();

    seed.append(other);

    let values: Vec<i32> = seed.into_iter().map(Traverser::into_inner).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}
