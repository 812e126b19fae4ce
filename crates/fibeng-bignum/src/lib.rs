//! # fibeng-bignum
//!
//! Fixed-width 768-bit unsigned integer arithmetic for the FibEng engine.
//!
//! [`U768`] is a value type of 24 little-endian 32-bit words. All arithmetic
//! is total and wraps modulo 2^768; nothing here allocates except the final
//! decimal rendering. The type is `Copy` and every operation produces a new
//! value, so concurrent callers need no coordination.

pub mod arith;
pub mod decimal;
pub mod uint;

pub use decimal::{to_decimal, MAX_DECIMAL_DIGITS};
pub use uint::{U768, WORDS, WORD_BITS};
