//! Lazy Fibonacci iterator using the standard additive recurrence.
//!
//! O(n) per query; serves as the linear reference the fast-doubling
//! implementation is validated against.

use fibeng_bignum::U768;

use crate::calculator::Calculator;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0). Values wrap
/// modulo 2^768 like every fixed-width operation.
///
/// # Example
/// ```
/// use fibeng_core::iterator::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    a: U768,
    b: U768,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: U768::ZERO,
            b: U768::ONE,
            index: 0,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, U768);

    fn next(&mut self) -> Option<Self::Item> {
        let item = (self.index, self.a);
        let next = self.a + self.b;
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
        Some(item)
    }
}

/// Linear-recurrence calculator built on [`FibIterator`].
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for Iterative {
    #[allow(clippy::cast_possible_truncation)]
    fn fib(&self, n: u64) -> U768 {
        match FibIterator::new().nth(n as usize) {
            Some((_, v)) => v,
            None => U768::ZERO, // unreachable: the iterator is infinite
        }
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
