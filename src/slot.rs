//! Slot storage: the per-position state of the open-addressed table.
//!
//! One slot is exactly one of three states, so "used and deleted at
//! once" is unrepresentable. Tombstones retain the key that died there
//! for diagnostics; the retained buffer is released when the slot is
//! reused or the table drops.

/// One table position. The key is the table's own copy of the caller's
/// bytes; the value is stored exactly as supplied.
#[derive(Debug)]
pub(crate) enum Slot<V> {
    /// Never held an entry.
    Empty,
    /// Live entry.
    Used { key: Box<[u8]>, value: V },
    /// Tombstone: an entry lived here and was deleted. Occupies
    /// probe-chain space until reused.
    Deleted { key: Box<[u8]> },
}

impl<V> Slot<V> {
    pub(crate) fn view(&self) -> SlotView<'_, V> {
        match self {
            Slot::Empty => SlotView::Empty,
            Slot::Used { key, value } => SlotView::Used { key, value },
            Slot::Deleted { key } => SlotView::Deleted { key },
        }
    }
}

/// Read-only projection of one slot, as returned by
/// [`ProbeMap::slot_view`](crate::ProbeMap::slot_view) and
/// [`ProbeMap::slots`](crate::ProbeMap::slots).
#[derive(Debug)]
pub enum SlotView<'a, V> {
    /// The slot has never held an entry.
    Empty,
    /// The slot holds a live entry.
    Used { key: &'a [u8], value: &'a V },
    /// The slot is a tombstone; `key` belonged to the deleted entry.
    Deleted { key: &'a [u8] },
}

// Hand-written: a view is a bundle of references and copies for any `V`.
impl<V> Copy for SlotView<'_, V> {}

impl<V> Clone for SlotView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}
