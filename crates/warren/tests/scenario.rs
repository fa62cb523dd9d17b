//! End-to-end behavior across insert, remove, recycling, and iteration.

use warren::Arena;

/// Assert that iteration yields exactly `expected`, in order, and that
/// `len` agrees.
fn assert_values<T: PartialEq + std::fmt::Debug>(arena: &Arena<T>, expected: &[T]) {
    assert_eq!(arena.len(), expected.len());
    let values: Vec<&T> = arena.iter().map(|(_, value)| value).collect();
    let expected: Vec<&T> = expected.iter().collect();
    assert_eq!(values, expected);
}

#[test]
fn free_list_recycles_the_freed_slot_in_place() {
    let mut arena = Arena::new();
    let hello = arena.insert("hello");
    let world = arena.insert("world!");
    let thanks = arena.insert("thanks");

    assert_eq!((hello.position(), hello.generation()), (0, 1));
    assert_eq!((world.position(), world.generation()), (1, 1));
    assert_eq!((thanks.position(), thanks.generation()), (2, 1));
    assert_values(&arena, &["hello", "world!", "thanks"]);

    assert!(arena.remove(world));
    let folks = arena.insert("folks!");
    assert_eq!((folks.position(), folks.generation()), (1, 2));
    assert_values(&arena, &["hello", "folks!", "thanks"]);

    assert!(arena.remove(hello));
    assert!(arena.remove(thanks));
    assert_values(&arena, &["folks!"]);

    assert!(arena.remove(folks));
    assert_values(&arena, &[]);
    assert!(arena.is_empty());
}

#[test]
fn fresh_iterators_over_an_unmutated_arena_agree() {
    let mut arena = Arena::new();
    let mid = arena.insert(20);
    arena.insert(10);
    arena.insert(30);
    arena.insert(40);
    assert!(arena.remove(mid));

    let first: Vec<_> = arena.iter().collect();
    let second: Vec<_> = arena.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn clone_and_source_diverge_independently() {
    let mut arena = Arena::new();
    let shared = arena.insert("shared");
    let mut copy = arena.clone();

    let only_copy = copy.insert("copy-only");
    let only_source = arena.insert("source-only");

    assert_eq!(copy.get(shared), Some(&"shared"));
    assert_eq!(arena.get(shared), Some(&"shared"));
    assert_eq!(copy.get(only_copy), Some(&"copy-only"));
    assert_eq!(arena.get(only_source), Some(&"source-only"));

    // Positions coincide across the two arenas, contents do not.
    assert_eq!(only_copy, only_source);
    assert_values(&copy, &["shared", "copy-only"]);
    assert_values(&arena, &["shared", "source-only"]);
}

#[test]
fn interleaved_churn_keeps_handles_coherent() {
    let mut arena = Arena::with_capacity(8);
    let mut live = Vec::new();
    for round in 0..4u32 {
        let batch: Vec<_> = (0..8).map(|offset| arena.insert(round * 8 + offset)).collect();
        // Keep every other handle from this round, remove the rest.
        for (i, handle) in batch.into_iter().enumerate() {
            if i % 2 == 0 {
                assert!(arena.remove(handle));
            } else {
                live.push(handle);
            }
        }
    }

    assert_eq!(arena.len(), live.len());
    for handle in &live {
        assert!(arena.get(*handle).is_some());
    }
}
