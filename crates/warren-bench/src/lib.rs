//! Shared workload builders for the warren benchmarks.

use warren::{Arena, Handle, Slot};

/// Build a fixed-storage arena with room for `n` `u64` values.
pub fn fixed_arena(n: usize) -> Arena<u64> {
    Arena::with_fixed_storage(vec![0u64; n], vec![Slot::default(); n])
}

/// Build a growable arena holding `n` sequential values, returning the
/// issued handles in insertion order.
pub fn filled_arena(n: usize) -> (Arena<u64>, Vec<Handle>) {
    let mut arena = Arena::with_capacity(n);
    let handles = (0..n as u64).map(|v| arena.insert(v)).collect();
    (arena, handles)
}
