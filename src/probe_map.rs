use crate::hash::HashStrategy;
use crate::primes;
use crate::probe::{self, Probed, ProbeSeq, ProbeStrategy};
use crate::slot::{Slot, SlotView};
use core::cell::Cell;
use core::fmt;
use core::mem;
use core::slice;

/// Requested capacity exceeds the largest table this crate knows a
/// prime for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CapacityError {
    /// The capacity that was asked for.
    pub requested: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot create a table of size {}: no known prime is large enough",
            self.requested
        )
    }
}

impl std::error::Error for CapacityError {}

/// Insertion failure: the key's probe sequence ran out of candidates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertError {
    TableFull,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::TableFull => {
                f.write_str("probe sequence exhausted: table is full for this key")
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// Probe costs accrued so far, split by the operation that paid them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ProbeCosts {
    pub insert: u64,
    pub search: u64,
    pub delete: u64,
}

/// Fixed-size open-addressing hash table over byte-string keys.
///
/// The table holds a prime number of slots and never resizes. Collisions
/// are resolved by walking the configured probe sequence; removals leave
/// tombstones that keep longer chains intact. Every slot a walk moves
/// past charges one unit of probe cost to the operation's counter, so
/// the counters read back how hard each strategy mix had to work.
///
/// Keys are copied in on insert; values are stored as given.
pub struct ProbeMap<V> {
    slots: Box<[Slot<V>]>,
    entries: usize,
    primary: HashStrategy,
    secondary: HashStrategy,
    probe: ProbeStrategy,
    // Interior mutability: lookups on `&self` still charge search cost.
    insert_cost: Cell<u64>,
    search_cost: Cell<u64>,
    delete_cost: Cell<u64>,
}

fn bump(counter: &Cell<u64>, steps: u64) {
    counter.set(counter.get() + steps);
}

fn resolve_hash(name: &str) -> HashStrategy {
    HashStrategy::resolve(name).unwrap_or_else(|| {
        let fallback = HashStrategy::default();
        log::warn!("invalid hash strategy '{name}' - using '{fallback}'");
        fallback
    })
}

fn resolve_probe(name: &str) -> ProbeStrategy {
    ProbeStrategy::resolve(name).unwrap_or_else(|| {
        let fallback = ProbeStrategy::default();
        log::warn!("invalid hash probe strategy '{name}' - using '{fallback}'");
        fallback
    })
}

impl<V> ProbeMap<V> {
    /// Create a table with the default strategies: sum hashing and
    /// linear probing.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Self::with_strategies(
            capacity,
            ProbeStrategy::default(),
            HashStrategy::default(),
            HashStrategy::default(),
        )
    }

    /// Create a table sized to the smallest known prime at or above
    /// `capacity`, with the given probing and hashing strategies. The
    /// secondary hash only matters for double hashing.
    pub fn with_strategies(
        capacity: usize,
        probe: ProbeStrategy,
        primary: HashStrategy,
        secondary: HashStrategy,
    ) -> Result<Self, CapacityError> {
        let size = primes::next_prime_at_least(capacity).ok_or(CapacityError {
            requested: capacity,
        })?;
        Ok(ProbeMap {
            slots: (0..size).map(|_| Slot::Empty).collect(),
            entries: 0,
            primary,
            secondary,
            probe,
            insert_cost: Cell::new(0),
            search_cost: Cell::new(0),
            delete_cost: Cell::new(0),
        })
    }

    /// Create a table resolving strategies by name. Names match on
    /// their first three characters; an unrecognized name logs a
    /// warning and falls back to that strategy's default.
    pub fn from_names(
        capacity: usize,
        probe: &str,
        primary: &str,
        secondary: &str,
    ) -> Result<Self, CapacityError> {
        Self::with_strategies(
            capacity,
            resolve_probe(probe),
            resolve_hash(primary),
            resolve_hash(secondary),
        )
    }

    fn sequence(&self, key: &[u8]) -> ProbeSeq {
        let start = self.primary.index(key, self.slots.len());
        self.probe
            .sequence(start, key, self.secondary, self.slots.len())
    }

    /// Insert a key-value pair, returning the slot index it occupies.
    ///
    /// A live entry with the same key has its value replaced in place.
    /// Otherwise the pair lands on the first tombstone of its chain, or
    /// failing that on the chain's empty end. The walk's probe cost is
    /// charged to the insertion counter whether or not it finds a slot.
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<usize, InsertError> {
        let mut cost = 0;
        let probed = probe::find_slot(self.sequence(key), &self.slots, key, false, &mut cost);
        bump(&self.insert_cost, cost);
        match probed {
            Probed::Match(index) => {
                let Slot::Used { value: stored, .. } = &mut self.slots[index] else {
                    unreachable!("walk matched a slot that is not live");
                };
                *stored = value;
                Ok(index)
            }
            Probed::Vacant(index) => {
                // Free-then-replace: a reused tombstone's retained key
                // drops here.
                self.slots[index] = Slot::Used {
                    key: key.into(),
                    value,
                };
                self.entries += 1;
                Ok(index)
            }
            Probed::Full => Err(InsertError::TableFull),
        }
    }

    /// Look up a key, charging the walk to the search counter.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let mut cost = 0;
        let found = probe::locate(self.sequence(key), &self.slots, key, &mut cost);
        bump(&self.search_cost, cost);
        let Slot::Used { value, .. } = &self.slots[found?] else {
            unreachable!("walk located a slot that is not live");
        };
        Some(value)
    }

    /// Mutable counterpart of [`ProbeMap::get`]; same cost accounting.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let mut cost = 0;
        let found = probe::locate(self.sequence(key), &self.slots, key, &mut cost);
        bump(&self.search_cost, cost);
        let Slot::Used { value, .. } = &mut self.slots[found?] else {
            unreachable!("walk located a slot that is not live");
        };
        Some(value)
    }

    /// Remove a key and return its value, leaving a tombstone in the
    /// slot. The walk is charged to the deletion counter.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let mut cost = 0;
        let found = probe::locate(self.sequence(key), &self.slots, key, &mut cost);
        bump(&self.delete_cost, cost);
        let index = found?;
        let Slot::Used { key, value } = mem::replace(&mut self.slots[index], Slot::Empty) else {
            unreachable!("walk located a slot that is not live");
        };
        self.slots[index] = Slot::Deleted { key };
        self.entries -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of slots in the table, occupied or not.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Snapshot of the cost counters.
    pub fn costs(&self) -> ProbeCosts {
        ProbeCosts {
            insert: self.insert_cost.get(),
            search: self.search_cost.get(),
            delete: self.delete_cost.get(),
        }
    }

    pub fn probe_strategy(&self) -> ProbeStrategy {
        self.probe
    }

    pub fn primary_hash(&self) -> HashStrategy {
        self.primary
    }

    pub fn secondary_hash(&self) -> HashStrategy {
        self.secondary
    }

    /// View one slot by index: live, never used, or tombstoned. `None`
    /// when the index is outside the table.
    pub fn slot_view(&self, index: usize) -> Option<SlotView<'_, V>> {
        self.slots.get(index).map(Slot::view)
    }

    /// Iterate every slot in index order, occupied or not.
    pub fn slots(&self) -> SlotViews<'_, V> {
        SlotViews {
            inner: self.slots.iter(),
        }
    }

    /// Iterate live entries in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Iterate live entries in slot order with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.slots.iter_mut(),
        }
    }

    /// Visit live entries in slot order until the visitor declines.
    /// The first `Err` aborts the traversal and is returned as-is.
    pub fn try_for_each<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&[u8], &V) -> Result<(), E>,
    {
        for (key, value) in self.iter() {
            visit(key, value)?;
        }
        Ok(())
    }
}

/// Iterator over every slot of a [`ProbeMap`] in index order.
pub struct SlotViews<'a, V> {
    inner: slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for SlotViews<'a, V> {
    type Item = SlotView<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Slot::view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for SlotViews<'_, V> {}

/// Iterator over the live entries of a [`ProbeMap`].
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.inner.by_ref() {
            if let Slot::Used { key, value } = slot {
                return Some((&key[..], value));
            }
        }
        None
    }
}

/// Iterator over the live entries of a [`ProbeMap`] with mutable
/// values.
pub struct IterMut<'a, V> {
    inner: slice::IterMut<'a, Slot<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a [u8], &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.inner.by_ref() {
            if let Slot::Used { key, value } = slot {
                return Some((&key[..], value));
            }
        }
        None
    }
}
