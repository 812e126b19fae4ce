//! Timed wrappers around the pure engine calls.
//!
//! The engine owns no clocks or counters; callers who want latency data
//! wrap the pure functions and receive a result structure, keeping the
//! engine reentrant.

use std::time::{Duration, Instant};

use fibeng_bignum::U768;

/// A computed value together with how long the computation took.
#[derive(Debug, Clone, Copy)]
pub struct TimedComputation {
    /// F(n), reduced modulo 2^768 beyond capacity.
    pub value: U768,
    /// Wall-clock duration of the computation alone.
    pub compute: Duration,
}

/// Compute F(n) and measure the computation latency.
#[must_use]
pub fn fibonacci_timed(n: u64) -> TimedComputation {
    let start = Instant::now();
    let value = crate::compute_fibonacci(n);
    TimedComputation {
        value,
        compute: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_value_matches_untimed() {
        let timed = fibonacci_timed(100);
        assert_eq!(timed.value, crate::compute_fibonacci(100));
    }

    #[test]
    fn repeated_calls_are_independent() {
        // No hidden counters: the same index always yields the same value.
        let first = fibonacci_timed(500).value;
        let second = fibonacci_timed(500).value;
        assert_eq!(first, second);
    }
}
