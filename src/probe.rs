//! Probe strategies: candidate slot orders and the two walks over them.
//!
//! A probe sequence turns a home slot into a bounded order of candidate
//! positions. Two walks consume sequences: `find_slot` answers "where
//! does this key live or land" for insert, `locate` answers "where is
//! this key" for lookup and delete. Both charge one cost unit for every
//! candidate they move past; the terminating test is free, and a walk
//! that exhausts its sequence has charged exactly the table size.

use crate::hash::HashStrategy;
use crate::slot::Slot;
use core::fmt;

/// Order in which collisions are pushed to other slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProbeStrategy {
    /// Consecutive slots from the home slot, wrapping. Visits every slot
    /// once.
    Linear,
    /// Offsets 1, 4, 9, … from the home slot. Offsets repeat positions,
    /// so the walk can report a full table while vacancies remain; the
    /// home slot itself only appears when a square wraps to zero.
    Quadratic,
    /// Steps of `secondary(key) mod size` from the home slot, testing
    /// the home slot first. A step of zero retests the home slot until
    /// the attempt bound ends the walk.
    DoubleHash,
}

impl ProbeStrategy {
    /// Candidate order for a key whose home slot is `start` in a table
    /// of `size` slots. `secondary` supplies the double-hash step and is
    /// ignored by the other strategies.
    pub(crate) fn sequence(
        self,
        start: usize,
        key: &[u8],
        secondary: HashStrategy,
        size: usize,
    ) -> ProbeSeq {
        debug_assert!(start < size);
        let step = match self {
            ProbeStrategy::DoubleHash => secondary.index(key, size),
            ProbeStrategy::Linear | ProbeStrategy::Quadratic => 0,
        };
        ProbeSeq {
            strategy: self,
            start,
            step,
            size,
            attempt: 0,
        }
    }

    /// Canonical name; resolvable back through
    /// [`ProbeStrategy::resolve`].
    pub fn name(self) -> &'static str {
        match self {
            ProbeStrategy::Linear => "linear",
            ProbeStrategy::Quadratic => "quadratic",
            ProbeStrategy::DoubleHash => "double",
        }
    }

    /// Resolve a strategy from the first three bytes of `name`. `None`
    /// for short or unrecognized names; callers substitute the
    /// documented default.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.as_bytes().get(..3)? {
            b"lin" => Some(ProbeStrategy::Linear),
            b"qua" => Some(ProbeStrategy::Quadratic),
            b"dou" => Some(ProbeStrategy::DoubleHash),
            _ => None,
        }
    }
}

impl Default for ProbeStrategy {
    /// The substitution default for unrecognized names.
    fn default() -> Self {
        ProbeStrategy::Linear
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate positions for one key, in probe order. Yields at most
/// `size` indices, each in `[0, size)`.
pub(crate) struct ProbeSeq {
    strategy: ProbeStrategy,
    start: usize,
    step: usize,
    size: usize,
    attempt: usize,
}

impl Iterator for ProbeSeq {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.attempt == self.size {
            return None;
        }
        let i = self.attempt;
        self.attempt += 1;
        Some(match self.strategy {
            ProbeStrategy::Linear => (self.start + i) % self.size,
            ProbeStrategy::Quadratic => {
                // Table sizes stay below the prime bound, so the square
                // fits without overflow.
                let offset = (i + 1) * (i + 1) % self.size;
                (self.start + offset) % self.size
            }
            ProbeStrategy::DoubleHash => (self.start + i * self.step) % self.size,
        })
    }
}

/// Outcome of a find-a-slot walk.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Probed {
    /// A live entry with this key sits at the index.
    Match(usize),
    /// No live entry; the index is where an insert lands.
    Vacant(usize),
    /// The candidate order is exhausted with no landing slot.
    Full,
}

/// Walk `seq` to find where `key` lives or should land.
///
/// Live non-matching slots are passed over. The first tombstone is
/// remembered as the preferred landing slot, but the walk continues to
/// the chain's empty end so a live duplicate beyond the tombstone is
/// never shadowed. With `stop_on_tombstone`, a tombstone instead ends
/// the walk with no landing slot.
pub(crate) fn find_slot<V>(
    seq: ProbeSeq,
    slots: &[Slot<V>],
    key: &[u8],
    stop_on_tombstone: bool,
    cost: &mut u64,
) -> Probed {
    let mut reusable = None;
    for index in seq {
        match &slots[index] {
            Slot::Used { key: live, .. } if &**live == key => return Probed::Match(index),
            Slot::Used { .. } => *cost += 1,
            Slot::Deleted { .. } => {
                if stop_on_tombstone {
                    return Probed::Full;
                }
                if reusable.is_none() {
                    reusable = Some(index);
                }
                *cost += 1;
            }
            Slot::Empty => return Probed::Vacant(reusable.unwrap_or(index)),
        }
    }
    match reusable {
        Some(index) => Probed::Vacant(index),
        None => Probed::Full,
    }
}

/// Walk `seq` to find the live entry for `key`, if any.
///
/// Tombstones and non-matching live slots are stepped over; a never-used
/// slot proves the key absent along this chain.
pub(crate) fn locate<V>(
    seq: ProbeSeq,
    slots: &[Slot<V>],
    key: &[u8],
    cost: &mut u64,
) -> Option<usize> {
    for index in seq {
        match &slots[index] {
            Slot::Used { key: live, .. } if &**live == key => return Some(index),
            Slot::Empty => return None,
            _ => *cost += 1,
        }
    }
    None
}
