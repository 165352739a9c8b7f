//! probemap: a fixed-size open-addressing hash table that makes
//! collision handling observable through pluggable strategies and
//! per-operation probe-cost counters.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the mechanics of open addressing visible so strategy
//!   choices can be compared, instead of hiding them behind a
//!   general-purpose map.
//! - Layers:
//!   - HashStrategy: turns a byte-string key into a home slot; also
//!     supplies the step for double hashing.
//!   - ProbeStrategy and the walks over its sequences: produce the
//!     bounded candidate order for a key and consume it, charging one
//!     cost unit per slot moved past.
//!   - Slot / SlotView: per-slot storage with tombstones, and the
//!     borrowed projection handed out for inspection.
//!   - ProbeMap<V>: public API tying the layers together with cost
//!     counters and diagnostic rendering.
//!
//! Constraints
//! - Fixed size: capacity rounds up to a prime at construction and the
//!   table never resizes; an insert can fail with a full table.
//! - Single probe discipline: insert, lookup, and delete walk the same
//!   configured sequence, so their costs are comparable.
//! - Counters live in `Cell`s so read-only lookups on `&self` still
//!   charge search cost; the table is consequently not `Sync`.
//! - Keys are byte strings copied in on insert; values stored as given.
//!
//! Cost accounting
//! - Every candidate slot a walk moves past charges one unit; the test
//!   that ends the walk is free. A walk that exhausts all candidates
//!   has charged exactly the table size. Costs accrue on failing walks
//!   too; a miss is the expensive case.
//!
//! Tombstone semantics
//! - Removal leaves a tombstone retaining the dead key, which keeps
//!   probe chains intact for entries placed beyond it. An insert
//!   reuses the first tombstone on its chain but walks on to the
//!   chain's end first, so a live duplicate beyond the tombstone is
//!   updated rather than shadowed. Lookups step over tombstones and
//!   conclude absence only at a never-used slot.
//!
//! Why this split?
//! - Localize invariants: the hash and probe layers are pure index
//!   arithmetic, testable without a table.
//! - The probe layer never allocates; walks borrow the slot slice and
//!   report indices, and only `ProbeMap` mutates storage.
//! - Diagnostics (`dump`, `summary`, `printable_key`) build on the
//!   public view types and hold no privileged state.
//!
//! Notes and non-goals
//! - No resizing or rehashing; a full table is an observable outcome,
//!   not an emergency.
//! - Single-threaded accounting: `Send` where `V` allows, never `Sync`.
//! - No iteration-order promises beyond slot order.
//! - Quadratic probing tests offsets 1, 4, 9, … from the home slot and
//!   revisits the home slot only when a square wraps to zero; it can
//!   report a full table while vacancies remain.
//! - A double-hash step of zero degenerates to retesting the home slot
//!   and still terminates at the attempt bound.
//! - Public surface is `ProbeMap` with its strategy, view, and error
//!   types; the modules behind it are implementation details.

mod hash;
mod primes;
mod probe;
mod probe_map;
mod probe_proptest;
mod report;
mod slot;

// Public surface
pub use hash::HashStrategy;
pub use probe::ProbeStrategy;
pub use probe_map::{CapacityError, InsertError, Iter, IterMut, ProbeCosts, ProbeMap, SlotViews};
pub use report::printable_key;
pub use slot::SlotView;
