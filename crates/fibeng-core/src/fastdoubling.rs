//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates the bits of n from MSB to LSB. O(log n) iterations, each
//! costing four fixed-width multiplications and a few additions.

use fibeng_bignum::U768;

use crate::calculator::Calculator;

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibeng_core::calculator::Calculator;
/// use fibeng_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// assert_eq!(calc.fib(100).to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn fib(&self, n: u64) -> U768 {
        if n == 0 {
            return U768::ZERO;
        }
        if n == 1 {
            return U768::ONE;
        }

        // Consuming the most significant 1-bit of n leaves the pair at
        // (F(1), F(2)) = (1, 1); the remaining bits are walked high to low.
        let mut a = U768::ONE;
        let mut b = U768::ONE;
        let num_bits = 64 - n.leading_zeros();

        for i in (0..num_bits - 1).rev() {
            // Invariant: (a, b) == (F(k), F(k+1)) mod 2^768 for the bit
            // prefix so far. Once the pair wraps, 2b - a can borrow as raw
            // words; the identity still holds modulo 2^768, so the
            // subtraction is taken without an ordering contract.
            let (t, _) = (b + b).overflowing_sub(&a); // 2*F(k+1) - F(k)
            let c = a * t; // F(2k)
            let d = a * a + b * b; // F(2k+1)

            if (n >> i) & 1 == 1 {
                a = d;
                b = c + d; // F(2k+2) = F(2k) + F(2k+1)
            } else {
                a = c;
                b = d;
            }
        }

        a
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
