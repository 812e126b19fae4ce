//! The fixed-width unsigned integer type.
//!
//! A `U768` is exactly [`WORDS`] 32-bit words, least-significant first.
//! The width never changes: results that would not fit are truncated
//! modulo 2^768 by the operations in [`crate::arith`].

use std::cmp::Ordering;
use std::fmt;

/// Number of bits per word.
pub const WORD_BITS: u32 = 32;

/// Number of words in a `U768`.
pub const WORDS: usize = 24;

/// Total bit width (768).
pub const BITS: u32 = WORD_BITS * WORDS as u32;

/// Fixed-width 768-bit unsigned integer.
///
/// Semantic value is `sum(word[i] * 2^(32*i))` over the little-endian word
/// array, range `[0, 2^768 - 1]`.
///
/// # Example
/// ```
/// use fibeng_bignum::U768;
/// let v = U768::from(55u64);
/// assert_eq!(v.to_string(), "55");
/// assert_eq!(U768::ZERO.to_string(), "0");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct U768 {
    words: [u32; WORDS],
}

impl U768 {
    /// The value 0.
    pub const ZERO: Self = Self::from_u64(0);

    /// The value 1.
    pub const ONE: Self = Self::from_u64(1);

    /// The value 2^768 - 1.
    pub const MAX: Self = Self {
        words: [u32::MAX; WORDS],
    };

    /// Construct from a small (at most 64-bit) seed.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u64(v: u64) -> Self {
        let mut words = [0u32; WORDS];
        words[0] = v as u32;
        words[1] = (v >> WORD_BITS) as u32;
        Self { words }
    }

    /// Construct from a raw little-endian word array.
    #[must_use]
    pub const fn from_words(words: [u32; WORDS]) -> Self {
        Self { words }
    }

    /// The little-endian word array.
    #[must_use]
    pub const fn words(&self) -> &[u32; WORDS] {
        &self.words
    }

    /// True if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Index of the highest nonzero word, or `None` for zero.
    #[must_use]
    pub fn top_word(&self) -> Option<usize> {
        self.words.iter().rposition(|&w| w != 0)
    }

    /// Bit length of the value (0 for zero).
    #[must_use]
    pub fn bits(&self) -> u32 {
        match self.top_word() {
            Some(i) => (i as u32 + 1) * WORD_BITS - self.words[i].leading_zeros(),
            None => 0,
        }
    }
}

impl Default for U768 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for U768 {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl From<u32> for U768 {
    fn from(v: u32) -> Self {
        Self::from_u64(u64::from(v))
    }
}

impl Ord for U768 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare from the most significant word down.
        for i in (0..WORDS).rev() {
            match self.words[i].cmp(&other.words[i]) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U768 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for U768 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::decimal::to_decimal(self))
    }
}

impl fmt::Debug for U768 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U768({self})")
    }
}
