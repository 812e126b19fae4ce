//! # fibeng-core
//!
//! Fast-doubling Fibonacci engine over the fixed 768-bit width of
//! [`fibeng_bignum::U768`]. Purely synchronous compute: no I/O, no shared
//! state, bit-for-bit reproducible for a given index.

pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod iterator;
pub mod timing;

pub use calculator::Calculator;
pub use constants::{FIB_TABLE, MAX_FIB_U64, MAX_INDEX};
pub use timing::{fibonacci_timed, TimedComputation};

use fibeng_bignum::U768;

/// Compute F(n) over the fixed 768-bit width.
///
/// Small indices (n <= 93) come from a precomputed u64 table; larger ones
/// run fast doubling. If the true F(n) exceeds 2^768 (first at n = 1108),
/// the result is the true value reduced modulo 2^768 — documented
/// truncation, not an error.
///
/// # Example
/// ```
/// assert_eq!(fibeng_core::compute_fibonacci(10).to_string(), "55");
/// assert_eq!(fibeng_core::compute_fibonacci(0).to_string(), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn compute_fibonacci(n: u64) -> U768 {
    if n <= MAX_FIB_U64 {
        return U768::from(FIB_TABLE[n as usize]);
    }
    fastdoubling::FastDoubling::new().fib(n)
}

/// Render a fixed-width value as its decimal string. Total function.
///
/// # Example
/// ```
/// let v = fibeng_core::compute_fibonacci(20);
/// assert_eq!(fibeng_core::to_decimal_string(&v), "6765");
/// ```
#[must_use]
pub fn to_decimal_string(v: &U768) -> String {
    fibeng_bignum::to_decimal(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_values() {
        for (n, expected) in [
            (0u64, "0"),
            (1, "1"),
            (2, "1"),
            (10, "55"),
            (20, "6765"),
            (100, "354224848179261915075"),
        ] {
            assert_eq!(to_decimal_string(&compute_fibonacci(n)), expected, "F({n})");
        }
    }

    #[test]
    fn fast_path_agrees_with_doubling() {
        use calculator::Calculator;
        let calc = fastdoubling::FastDoubling::new();
        for n in [0u64, 1, 50, 93] {
            assert_eq!(compute_fibonacci(n), calc.fib(n), "F({n})");
        }
    }
}
