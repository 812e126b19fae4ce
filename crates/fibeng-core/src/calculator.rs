//! The `Calculator` trait implemented by Fibonacci algorithms.
//!
//! Every algorithm is a total function over the fixed width: no error
//! path, no cancellation, no shared state. Results beyond 2^768 wrap.

use fibeng_bignum::U768;

/// A Fibonacci algorithm over the fixed 768-bit width.
pub trait Calculator: Send + Sync {
    /// Compute F(n), reduced modulo 2^768 if the true value exceeds capacity.
    fn fib(&self, n: u64) -> U768;

    /// Name of this algorithm.
    fn name(&self) -> &'static str;
}
