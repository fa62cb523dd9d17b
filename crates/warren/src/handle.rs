//! Stable handles into an [`Arena`](crate::Arena).
//!
//! A [`Handle`] pairs a storage position with the occupancy generation that
//! was current when the handle was issued. The pair is a capability, not an
//! owning reference: the arena owns the value, and the generation lets it
//! reject handles whose slot has since been freed or reissued.

use std::fmt;

use crate::mnemonic;

/// Stable reference to a value stored in an [`Arena`](crate::Arena).
///
/// Issued by [`Arena::insert`](crate::Arena::insert) and immutable
/// afterwards. A handle resolves only while its position is occupied with
/// the same generation; once the slot is removed (and possibly reissued to
/// an unrelated value) every operation taking the old handle reports
/// failure instead of touching the new occupant.
///
/// Handles are cheap to copy, equality-comparable, and hashable, but carry
/// no ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    position: usize,
    generation: u64,
}

impl Handle {
    /// Create a handle for a slot at `position` with the given generation.
    pub(crate) fn new(position: usize, generation: u64) -> Self {
        Self {
            position,
            generation,
        }
    }

    /// The storage position this handle refers to.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The occupancy generation this handle expects at its position.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A deterministic, human-memorable rendering of this handle.
    ///
    /// Derived purely from `(position, generation)` over a fixed vocabulary,
    /// so the same handle always renders to the same phrase and distinct
    /// handles are very likely to render differently — exactly so while both
    /// components are below the vocabulary size (256), by wraparound beyond.
    /// Intended for logs and debugging only: no uniqueness or security
    /// guarantee, and phrases must never be persisted or compared in place
    /// of the handle itself.
    ///
    /// ```rust
    /// use warren::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let hello = arena.insert("hello");
    /// let world = arena.insert("world");
    /// assert_eq!(hello.mnemonic(), hello.mnemonic());
    /// assert_ne!(hello.mnemonic(), world.mnemonic());
    /// ```
    pub fn mnemonic(&self) -> String {
        mnemonic::phrase(self.position, self.generation)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(pos={}, gen={})", self.position, self.generation)
    }
}
