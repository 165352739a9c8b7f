#![cfg(test)]

// Property tests for the probe walks, kept inside the crate so they can
// reach the crate-private sequence and walk functions.

use crate::hash::HashStrategy;
use crate::probe::{self, Probed, ProbeStrategy};
use crate::slot::Slot;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Table sizes are primes, as construction guarantees.
fn arb_size() -> impl Strategy<Value = usize> {
    proptest::sample::select(vec![2usize, 3, 5, 7, 11, 23, 53, 97])
}

fn arb_probe() -> impl Strategy<Value = ProbeStrategy> {
    proptest::sample::select(vec![
        ProbeStrategy::Linear,
        ProbeStrategy::Quadratic,
        ProbeStrategy::DoubleHash,
    ])
}

fn arb_secondary() -> impl Strategy<Value = HashStrategy> {
    proptest::sample::select(vec![
        HashStrategy::Length,
        HashStrategy::Sum,
        HashStrategy::Polynomial,
    ])
}

fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..12)
}

fn arb_slot() -> impl Strategy<Value = Slot<u32>> {
    (0u8..3, arb_key(), any::<u32>()).prop_map(|(tag, key, value)| match tag {
        0 => Slot::Empty,
        1 => Slot::Used {
            key: key.into(),
            value,
        },
        _ => Slot::Deleted { key: key.into() },
    })
}

fn sized_slots() -> impl Strategy<Value = (usize, Vec<Slot<u32>>)> {
    arb_size().prop_flat_map(|size| (Just(size), proptest::collection::vec(arb_slot(), size)))
}

// Property: walk outcomes over arbitrary slot contents.
// - Both walks terminate, yield in-table indices, and charge at most
//   the table size.
// - A walk's verdict is stable: whatever find_slot reports, locate
//   agrees with after the reported slot is made live.
// - The strict walk only lands on never-used slots, behind a run of
//   live non-matches.
// - Linear covers the whole table; double hashing does too whenever its
//   step is nonzero, and degenerates to the home slot when it is zero.
// - Walks over a table with no vacancy anywhere charge exactly the
//   table size and report failure.
proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn walks_are_bounded(
        (size, slots) in sized_slots(),
        probe_strategy in arb_probe(),
        secondary in arb_secondary(),
        key in arb_key(),
        strict in any::<bool>(),
    ) {
        let start = HashStrategy::Polynomial.index(&key, size);

        let mut cost = 0;
        let probed = probe::find_slot(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            strict,
            &mut cost,
        );
        prop_assert!(cost <= size as u64);
        if let Probed::Match(index) | Probed::Vacant(index) = probed {
            prop_assert!(index < size);
        }

        let mut cost = 0;
        let found = probe::locate(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            &mut cost,
        );
        prop_assert!(cost <= size as u64);
        if let Some(index) = found {
            prop_assert!(index < size);
        }
    }

    #[test]
    fn landing_slot_is_locatable(
        (size, mut slots) in sized_slots(),
        probe_strategy in arb_probe(),
        secondary in arb_secondary(),
        key in arb_key(),
    ) {
        let start = HashStrategy::Polynomial.index(&key, size);
        let mut cost = 0;
        let probed = probe::find_slot(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            false,
            &mut cost,
        );

        if let Probed::Vacant(index) = probed {
            slots[index] = Slot::Used {
                key: key.clone().into(),
                value: 0,
            };
        }
        if let Probed::Match(index) = probed {
            prop_assert!(
                matches!(&slots[index], Slot::Used { key: live, .. } if **live == *key),
                "matched slot must hold the key"
            );
        }

        let mut cost = 0;
        let found = probe::locate(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            &mut cost,
        );
        match probed {
            Probed::Match(index) | Probed::Vacant(index) => {
                prop_assert_eq!(found, Some(index));
            }
            Probed::Full => prop_assert_eq!(found, None),
        }
    }

    #[test]
    fn strict_walk_lands_past_live_runs_only(
        (size, slots) in sized_slots(),
        probe_strategy in arb_probe(),
        secondary in arb_secondary(),
        key in arb_key(),
    ) {
        let start = HashStrategy::Polynomial.index(&key, size);
        let mut cost = 0;
        let probed = probe::find_slot(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            true,
            &mut cost,
        );

        match probed {
            Probed::Vacant(index) => {
                prop_assert!(matches!(slots[index], Slot::Empty));
                for candidate in probe_strategy.sequence(start, &key, secondary, size) {
                    if candidate == index {
                        break;
                    }
                    prop_assert!(
                        matches!(slots[candidate], Slot::Used { .. }),
                        "strict walk must pass live slots only"
                    );
                }
            }
            Probed::Match(index) => {
                prop_assert!(
                    matches!(&slots[index], Slot::Used { key: live, .. } if **live == *key),
                    "matched slot must hold the key"
                );
            }
            Probed::Full => {}
        }
    }

    #[test]
    fn full_cycle_coverage(
        size in arb_size(),
        secondary in arb_secondary(),
        key in arb_key(),
    ) {
        let start = HashStrategy::Polynomial.index(&key, size);

        let linear: BTreeSet<usize> = ProbeStrategy::Linear
            .sequence(start, &key, secondary, size)
            .collect();
        prop_assert_eq!(linear.len(), size);

        let order: Vec<usize> = ProbeStrategy::DoubleHash
            .sequence(start, &key, secondary, size)
            .collect();
        prop_assert_eq!(order.len(), size);
        let step = secondary.index(&key, size);
        if step == 0 {
            prop_assert!(order.iter().all(|&index| index == start));
        } else {
            // Prime size and nonzero step are coprime.
            let distinct: BTreeSet<usize> = order.iter().copied().collect();
            prop_assert_eq!(distinct.len(), size);
        }
    }

    #[test]
    fn exhausted_walks_charge_size(
        size in arb_size(),
        probe_strategy in arb_probe(),
        secondary in arb_secondary(),
    ) {
        let slots: Vec<Slot<u32>> = (0..size)
            .map(|i| Slot::Used {
                key: vec![i as u8].into(),
                value: 0,
            })
            .collect();
        let key = vec![7u8; 3];
        let start = HashStrategy::Polynomial.index(&key, size);

        let mut cost = 0;
        let probed = probe::find_slot(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            false,
            &mut cost,
        );
        prop_assert_eq!(probed, Probed::Full);
        prop_assert_eq!(cost, size as u64);

        let mut cost = 0;
        let found = probe::locate(
            probe_strategy.sequence(start, &key, secondary, size),
            &slots,
            &key,
            &mut cost,
        );
        prop_assert_eq!(found, None);
        prop_assert_eq!(cost, size as u64);
    }
}
