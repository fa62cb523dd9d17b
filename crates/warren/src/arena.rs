//! The generational arena container.
//!
//! [`Arena`] stores values in a value array kept parallel to a [`Slot`]
//! metadata array, and addresses them through [`Handle`]s instead of raw
//! indices. Freed positions are threaded into an intrusive free list and
//! recycled by later inserts with a bumped generation, so a handle to a
//! removed value can never silently resolve to the slot's next occupant.
//!
//! `free_head` does double duty. While no allocated slot is free it equals
//! `slots.len()` and acts as the append cursor; the moment a slot is freed
//! it becomes the index of that slot, whose `next_free` link records the
//! previous head. A single bounds comparison (`free_head < slots.len()`)
//! tells the two roles apart — there is no separate free-index collection
//! to fall out of sync.

use std::fmt;

use crate::handle::Handle;
use crate::iter::Iter;
use crate::slot::Slot;

/// A generational arena storing values of type `T` behind stable handles.
///
/// Insert, remove, and lookup are O(1). Stale handles — out of range,
/// already removed, or from an earlier occupancy of their slot — are an
/// expected condition and reported through `Option`/`bool` returns, never
/// a panic.
///
/// Two construction modes share this one type: growable arenas
/// ([`Arena::new`], [`Arena::with_capacity`]) reallocate as needed, while
/// fixed-storage arenas ([`Arena::with_fixed_storage`]) run inside
/// caller-pre-allocated buffers, never allocate, and treat overflow as a
/// programmer error.
///
/// Not thread-safe: callers serialize all access when sharing across
/// threads.
pub struct Arena<T> {
    slots: Vec<Slot>,
    values: Vec<T>,
    /// Free-list head, or the append cursor when no allocated slot is free.
    free_head: usize,
    /// Occupied-slot count.
    len: usize,
    /// Maximum slot count for fixed-storage arenas. 0 means growable.
    bound: usize,
}

impl<T> Arena<T> {
    /// Create an empty, growable arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            values: Vec::new(),
            free_head: 0,
            len: 0,
            bound: 0,
        }
    }

    /// Create an empty, growable arena with room for `capacity` values
    /// before the backing storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            free_head: 0,
            len: 0,
            bound: 0,
        }
    }

    /// Create a fixed-capacity arena inside caller-supplied storage.
    ///
    /// The buffers' common length becomes the capacity bound: the arena
    /// reuses their allocations, performs no allocation of its own, and
    /// [`Arena::insert`] panics instead of growing once the bound is
    /// reached. Existing buffer contents are discarded. This mode exists
    /// for zero-allocation use on latency-sensitive paths.
    ///
    /// # Panics
    ///
    /// Panics if the buffers' lengths differ or are zero — both are
    /// construction-time programmer errors.
    ///
    /// ```rust
    /// use warren::{Arena, Slot};
    ///
    /// let mut arena = Arena::with_fixed_storage(vec![0u32; 8], vec![Slot::default(); 8]);
    /// let h = arena.insert(7);
    /// assert_eq!(arena.get(h), Some(&7));
    /// ```
    pub fn with_fixed_storage(mut values: Vec<T>, mut slots: Vec<Slot>) -> Self {
        assert_eq!(
            values.len(),
            slots.len(),
            "value and slot buffers must have equal length"
        );
        assert!(!values.is_empty(), "fixed storage must not be empty");

        let bound = values.len();
        values.clear();
        slots.clear();

        Self {
            slots,
            values,
            free_head: 0,
            len: 0,
            bound,
        }
    }

    /// Store `value` and return a handle to it.
    ///
    /// Recycles the head of the free list when one exists (bumping that
    /// slot's generation), otherwise appends a fresh slot at generation 1.
    ///
    /// # Panics
    ///
    /// Panics when a fixed-storage arena is already at its capacity bound;
    /// growable arenas never panic here.
    pub fn insert(&mut self, value: T) -> Handle {
        if self.free_head < self.slots.len() {
            let position = self.free_head;
            let slot = &mut self.slots[position];
            let generation = slot.reoccupy();
            self.free_head = slot.next_free();
            self.values[position] = value;
            self.len += 1;
            Handle::new(position, generation)
        } else {
            if self.bound > 0 && self.slots.len() >= self.bound {
                panic!("arena is full: fixed capacity {} reached", self.bound);
            }
            self.values.push(value);
            self.slots.push(Slot::first_occupied());
            self.free_head = self.slots.len();
            self.len += 1;
            Handle::new(self.slots.len() - 1, 1)
        }
    }

    /// Remove the value `handle` refers to.
    ///
    /// Returns `false` without mutating anything if the handle is out of
    /// range, its slot is already free, or its generation is stale.
    /// Otherwise the slot becomes the new free-list head and `true` is
    /// returned. The removed value stays owned by the arena until the slot
    /// is recycled or the arena is cleared or dropped.
    pub fn remove(&mut self, handle: Handle) -> bool {
        let Some(position) = self.live_position(handle) else {
            return false;
        };
        self.slots[position].release(self.free_head);
        self.free_head = position;
        self.len -= 1;
        true
    }

    /// Look up the value `handle` refers to.
    ///
    /// Returns `None` if the handle is out of range, freed, or stale.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let position = self.live_position(handle)?;
        Some(&self.values[position])
    }

    /// Overwrite the value `handle` refers to, in place.
    ///
    /// The slot's generation is untouched: `handle` (and every copy of it)
    /// stays valid. Returns `false` without mutating anything if the
    /// handle is out of range, freed, or stale.
    pub fn put(&mut self, handle: Handle, value: T) -> bool {
        match self.live_position(handle) {
            Some(position) => {
                self.values[position] = value;
                true
            }
            None => false,
        }
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of the backing storage in slots — allocated, not occupied.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Remove every value and reset the arena to zero allocated slots.
    ///
    /// Backing capacity and any fixed-capacity bound are kept.
    ///
    /// # Handle invalidation
    ///
    /// `clear` discards slot metadata instead of retiring generations, so a
    /// handle issued afterwards can coincide exactly — same position, same
    /// generation — with one issued before. Every handle issued before
    /// `clear` is therefore unconditionally invalid, and the usual
    /// generation check cannot be relied on to catch one that is reused
    /// across the call.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.values.clear();
        self.free_head = 0;
        self.len = 0;
    }

    /// Iterate over the occupied slots in ascending position order.
    ///
    /// Yields `(Handle, &T)` pairs. The iterator is single-pass; build a
    /// new one to traverse again.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Slot metadata, parallel to [`Arena::values`].
    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Stored values, parallel to [`Arena::slots`].
    pub(crate) fn values(&self) -> &[T] {
        &self.values
    }

    /// Resolve `handle` to its position if its slot is live and current.
    fn live_position(&self, handle: Handle) -> Option<usize> {
        let slot = self.slots.get(handle.position())?;
        if !slot.is_occupied() || slot.generation() != handle.generation() {
            return None;
        }
        Some(handle.position())
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Arena<T> {
    /// Deep copy: separate backing storage with the same contents,
    /// free-list state, reserved capacity, and capacity bound. Mutating
    /// either arena afterwards leaves the other untouched.
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.slots.capacity());
        slots.extend_from_slice(&self.slots);
        let mut values = Vec::with_capacity(self.values.capacity());
        values.extend(self.values.iter().cloned());
        Self {
            slots,
            values,
            free_head: self.free_head,
            len: self.len,
            bound: self.bound,
        }
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("free_head", &self.free_head)
            .field("slots", &self.slots)
            .finish()
    }
}
