//! Constants shared by the engine and its front end.

/// Highest Fibonacci index the device front end serves.
///
/// F(1000) has 209 decimal digits, comfortably inside the 768-bit width.
/// Indices beyond the first capacity overflow (n >= 1108) still produce a
/// defined value, reduced modulo 2^768.
pub const MAX_INDEX: u64 = 1000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`; F(94) overflows.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};
