//! Table sizing: the smallest known prime at least as large as a request.
//!
//! Table sizes are always prime so that double-hash steps below the size
//! are coprime to it and probe sequences can cover the whole table. The
//! known range is bounded; requests beyond it fail construction rather
//! than rounding down.

/// Upper bound of the known prime range (exclusive).
const PRIME_LIMIT: usize = 5000;

/// Smallest prime `>= n.max(2)`, or `None` when the search would leave
/// the known range.
pub(crate) fn next_prime_at_least(n: usize) -> Option<usize> {
    let mut candidate = n.max(2);
    while candidate < PRIME_LIMIT {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate += 1;
    }
    None
}

fn is_prime(n: usize) -> bool {
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
