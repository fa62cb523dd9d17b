//! Per-position occupancy metadata.
//!
//! Each storage position in an [`Arena`](crate::Arena) carries one [`Slot`]
//! recording whether the position holds a live value, which occupancy
//! generation is current, and — while the position is free — where the next
//! free position is. The free list is intrusive: it is threaded entirely
//! through these `next_free` links, with no side collection of free indices.

use std::fmt;

/// Occupancy state of a storage position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlotState {
    /// No live value; the slot is linked into the free list.
    Free,
    /// A live value is stored at this position.
    Occupied,
}

/// Occupancy metadata for a single arena storage position.
///
/// The generation starts at 1 the first time a position is occupied and is
/// incremented by exactly 1 on every later free→occupied transition. It
/// never decreases, and it is not touched by in-place overwrites. The
/// `next_free` link is meaningful only while the slot is free.
///
/// `Slot` values are exported so callers can pre-allocate metadata buffers
/// for [`Arena::with_fixed_storage`](crate::Arena::with_fixed_storage);
/// [`Slot::default`] is the never-occupied state such buffers start in.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    state: SlotState,
    generation: u64,
    next_free: usize,
}

impl Slot {
    /// Metadata for a freshly appended position: occupied, generation 1.
    pub(crate) fn first_occupied() -> Self {
        Self {
            state: SlotState::Occupied,
            generation: 1,
            next_free: 0,
        }
    }

    /// Whether the position currently holds a live value.
    pub(crate) fn is_occupied(&self) -> bool {
        self.state == SlotState::Occupied
    }

    /// The current occupancy generation.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// The next free-list link. Only meaningful while the slot is free.
    pub(crate) fn next_free(&self) -> usize {
        self.next_free
    }

    /// Re-occupy a freed slot, bumping its generation by exactly 1.
    ///
    /// Returns the new generation.
    pub(crate) fn reoccupy(&mut self) -> u64 {
        self.state = SlotState::Occupied;
        self.generation += 1;
        self.generation
    }

    /// Free an occupied slot and link it ahead of `next_free`.
    ///
    /// The generation is left in place; the next [`Slot::reoccupy`] bumps it.
    pub(crate) fn release(&mut self, next_free: usize) {
        self.state = SlotState::Free;
        self.next_free = next_free;
    }
}

impl Default for Slot {
    /// The never-occupied state: free, generation 0.
    fn default() -> Self {
        Self {
            state: SlotState::Free,
            generation: 0,
            next_free: 0,
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            SlotState::Occupied => write!(f, "Slot(occupied, gen={})", self.generation),
            SlotState::Free => write!(f, "Slot(free, next={})", self.next_free),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_free_at_generation_zero() {
        let slot = Slot::default();
        assert!(!slot.is_occupied());
        assert_eq!(slot.generation(), 0);
    }

    #[test]
    fn first_occupied_starts_at_generation_one() {
        let slot = Slot::first_occupied();
        assert!(slot.is_occupied());
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn reoccupy_bumps_generation_by_one() {
        let mut slot = Slot::first_occupied();
        slot.release(7);
        assert_eq!(slot.reoccupy(), 2);
        assert!(slot.is_occupied());
        assert_eq!(slot.generation(), 2);
    }

    #[test]
    fn release_links_and_keeps_generation() {
        let mut slot = Slot::first_occupied();
        slot.release(3);
        assert!(!slot.is_occupied());
        assert_eq!(slot.next_free(), 3);
        assert_eq!(slot.generation(), 1);
    }

    #[test]
    fn debug_distinguishes_occupied_from_free() {
        let mut slot = Slot::first_occupied();
        assert_eq!(format!("{slot:?}"), "Slot(occupied, gen=1)");
        slot.release(4);
        assert_eq!(format!("{slot:?}"), "Slot(free, next=4)");
    }
}
