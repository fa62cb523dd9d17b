//! Generational arena storage with stable, stale-checked handles.
//!
//! [`Arena`] stores values of a single type in pooled slots and hands out
//! [`Handle`]s — cheaply comparable `(position, generation)` pairs — instead
//! of references or raw indices. Insertion, removal, and lookup are O(1),
//! and a handle whose slot has been removed or reissued is detected and
//! rejected rather than resolving to the wrong value. Typical uses are
//! entity stores, graph-node pools, and caches of recyclable objects that
//! want pointer-like references without exposing addresses and without
//! garbage collection.
//!
//! # Quick start
//!
//! ```rust
//! use warren::Arena;
//!
//! let mut arena = Arena::new();
//! let hello = arena.insert("hello");
//! let world = arena.insert("world");
//! assert_eq!(arena.get(hello), Some(&"hello"));
//! assert_eq!(arena.get(world), Some(&"world"));
//!
//! // Stale handles are rejected, not resolved.
//! arena.remove(hello);
//! assert_eq!(arena.get(hello), None);
//!
//! // Freed slots are recycled; the generation tells the reuse apart.
//! let again = arena.insert("again");
//! assert_eq!(again.position(), hello.position());
//! assert_ne!(again, hello);
//! ```
//!
//! # Free-list design
//!
//! Freed slots form an intrusive singly-linked list threaded through the
//! slot metadata itself. The list head doubles as the append cursor while
//! no freed slot exists; a single bounds comparison picks between recycling
//! and appending on insert. See [`arena`] for details.
//!
//! # Construction modes
//!
//! Growable arenas ([`Arena::new`], [`Arena::with_capacity`]) own their
//! storage and reallocate as needed. Fixed-storage arenas
//! ([`Arena::with_fixed_storage`]) run inside caller-pre-allocated buffers
//! for zero-allocation use; inserting past their capacity is a programmer
//! error and panics.
//!
//! # Concurrency
//!
//! Deliberately single-threaded: no internal synchronization, no blocking,
//! every operation completes in bounded time. Share an arena across threads
//! only behind external synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod handle;
pub mod iter;
mod mnemonic;
pub mod slot;

pub use arena::Arena;
pub use handle::Handle;
pub use iter::Iter;
pub use slot::Slot;
