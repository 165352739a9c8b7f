//! Hash strategies: pure functions from key bytes to a slot index.
//!
//! The same enum serves both hash roles: the primary hash picks the home
//! slot, the secondary hash supplies the double-hash step size.

use core::fmt;

/// Seed for the polynomial hash accumulator.
const POLY_SEED: u64 = 4099;

/// A deterministic hash over key bytes, reduced modulo the table size.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HashStrategy {
    /// Key length modulo table size. Deliberately weak: every key of one
    /// length shares a home slot, which makes probe chains easy to stage.
    Length,
    /// Sum of the key bytes modulo table size.
    Sum,
    /// Polynomial rolling hash: accumulator seeded with 4099, each byte
    /// folded in as `acc * 33 + 2 * byte` with wrapping arithmetic,
    /// reduced at the end.
    Polynomial,
}

impl HashStrategy {
    /// Map `key` to an index in `[0, size)`. `size` must be nonzero.
    pub fn index(self, key: &[u8], size: usize) -> usize {
        match self {
            HashStrategy::Length => key.len() % size,
            HashStrategy::Sum => {
                let sum = key
                    .iter()
                    .fold(0u64, |acc, &b| acc.wrapping_add(u64::from(b)));
                (sum % size as u64) as usize
            }
            HashStrategy::Polynomial => {
                let mut acc = POLY_SEED;
                for &b in key {
                    acc = acc.wrapping_mul(33).wrapping_add(2 * u64::from(b));
                }
                (acc % size as u64) as usize
            }
        }
    }

    /// Canonical name; resolvable back through [`HashStrategy::resolve`].
    pub fn name(self) -> &'static str {
        match self {
            HashStrategy::Length => "length",
            HashStrategy::Sum => "sum",
            HashStrategy::Polynomial => "polynomial",
        }
    }

    /// Resolve a strategy from the first three bytes of `name`.
    ///
    /// `"new…"` is accepted alongside `"pol…"` as a legacy alias for the
    /// polynomial hash. Anything shorter than three bytes or unrecognized
    /// yields `None`; callers substitute the documented default.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.as_bytes().get(..3)? {
            b"len" => Some(HashStrategy::Length),
            b"sum" => Some(HashStrategy::Sum),
            b"new" | b"pol" => Some(HashStrategy::Polynomial),
            _ => None,
        }
    }
}

impl Default for HashStrategy {
    /// The substitution default for unrecognized names.
    fn default() -> Self {
        HashStrategy::Sum
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HashStrategy; 3] = [
        HashStrategy::Length,
        HashStrategy::Sum,
        HashStrategy::Polynomial,
    ];

    /// Invariant: every strategy maps any key into `[0, size)`.
    #[test]
    fn indexes_stay_in_range() {
        let keys: [&[u8]; 5] = [b"", b"a", b"hello world", &[0xff; 40], &[0, 1, 2, 3]];
        for strategy in ALL {
            for size in [2usize, 3, 5, 7, 11, 97, 4999] {
                for key in keys {
                    assert!(strategy.index(key, size) < size);
                }
            }
        }
    }

    /// Invariant: the length hash is exactly `len % size`.
    #[test]
    fn length_hash_is_length_mod_size() {
        assert_eq!(HashStrategy::Length.index(b"cat", 11), 3);
        assert_eq!(HashStrategy::Length.index(b"", 7), 0);
        assert_eq!(HashStrategy::Length.index(&[b'x'; 12], 11), 1);
    }

    /// Invariant: the sum hash adds byte values before reducing.
    #[test]
    fn sum_hash_adds_bytes() {
        // b"ABC" sums to 65 + 66 + 67 = 198.
        assert_eq!(HashStrategy::Sum.index(b"ABC", 11), 0);
        assert_eq!(HashStrategy::Sum.index(b"ABC", 7), 2);
        // High bytes are unsigned: 255 + 255 = 510.
        assert_eq!(HashStrategy::Sum.index(&[0xff, 0xff], 11), 4);
        assert_eq!(HashStrategy::Sum.index(b"", 11), 0);
    }

    /// Invariant: the polynomial hash folds from the 4099 seed.
    #[test]
    fn polynomial_hash_matches_reference() {
        // Empty key: just the seed. 4099 % 13 == 4.
        assert_eq!(HashStrategy::Polynomial.index(b"", 13), 4);
        // One byte: (4099 * 33 + 2 * 97) % 11 == 135461 % 11 == 7.
        assert_eq!(HashStrategy::Polynomial.index(b"a", 11), 7);
        // Two bytes: (135461 * 33 + 2 * 98) % 11 == 4470409 % 11 == 9.
        assert_eq!(HashStrategy::Polynomial.index(b"ab", 11), 9);
    }

    /// Invariant: resolution reads a three-byte prefix and nothing more.
    #[test]
    fn resolution_accepts_prefixes() {
        assert_eq!(HashStrategy::resolve("sum"), Some(HashStrategy::Sum));
        assert_eq!(HashStrategy::resolve("summation"), Some(HashStrategy::Sum));
        assert_eq!(HashStrategy::resolve("len"), Some(HashStrategy::Length));
        assert_eq!(HashStrategy::resolve("length"), Some(HashStrategy::Length));
        assert_eq!(
            HashStrategy::resolve("polynomial"),
            Some(HashStrategy::Polynomial)
        );
        assert_eq!(
            HashStrategy::resolve("newHash"),
            Some(HashStrategy::Polynomial)
        );
        assert_eq!(HashStrategy::resolve("su"), None);
        assert_eq!(HashStrategy::resolve(""), None);
        assert_eq!(HashStrategy::resolve("zzz"), None);
    }

    /// Invariant: canonical names round-trip through resolution.
    #[test]
    fn canonical_names_round_trip() {
        for strategy in ALL {
            assert_eq!(HashStrategy::resolve(strategy.name()), Some(strategy));
        }
    }
}
