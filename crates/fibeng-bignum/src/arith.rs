//! Arithmetic over [`U768`]: add, subtract, word shift, multiply.
//!
//! Every operation is total and wraps modulo 2^768. Subtraction assumes
//! an ordered pair (`a >= b`); the Fibonacci recurrence only ever subtracts
//! values it can prove non-negative, so the contract is a debug assertion
//! rather than a guarded error path.

use std::ops::{Add, Mul, Sub};

use crate::uint::{U768, WORDS};

impl U768 {
    /// Word-wise addition with carry propagation.
    ///
    /// A carry out of the top word is dropped (truncation modulo 2^768).
    #[must_use]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut out = [0u32; WORDS];
        let mut carry = false;
        for i in 0..WORDS {
            let (sum, c1) = self.words()[i].overflowing_add(rhs.words()[i]);
            let (sum, c2) = sum.overflowing_add(u32::from(carry));
            out[i] = sum;
            carry = c1 | c2;
        }
        Self::from_words(out)
    }

    /// Word-wise subtraction with borrow propagation, returning the
    /// wrapped difference and whether a borrow left the top word.
    ///
    /// Unlike [`Self::wrapping_sub`] this places no ordering contract on
    /// the operands; callers working modulo 2^768 use it directly.
    #[must_use]
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u32; WORDS];
        let mut borrow = false;
        for i in 0..WORDS {
            let (diff, b1) = self.words()[i].overflowing_sub(rhs.words()[i]);
            let (diff, b2) = diff.overflowing_sub(u32::from(borrow));
            out[i] = diff;
            borrow = b1 | b2;
        }
        (Self::from_words(out), borrow)
    }

    /// Word-wise subtraction with borrow propagation.
    ///
    /// Caller contract: `self >= rhs`. If violated, the result is the
    /// two's-complement wrapped value; debug builds assert instead.
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        debug_assert!(self >= rhs, "subtraction underflow: minuend < subtrahend");
        self.overflowing_sub(rhs).0
    }

    /// Shift left by `n` whole words (multiply by 2^(32n)).
    ///
    /// Words shifted past the top are discarded; shifting by [`WORDS`]
    /// or more yields zero.
    #[must_use]
    pub fn shl_words(&self, n: usize) -> Self {
        if n >= WORDS {
            return Self::ZERO;
        }
        let mut out = [0u32; WORDS];
        out[n..].copy_from_slice(&self.words()[..WORDS - n]);
        Self::from_words(out)
    }

    /// Schoolbook multiplication, truncated modulo 2^768.
    ///
    /// Each pair of word indices `(i, j)` with `i + j < WORDS` contributes
    /// the double-width product of `word[i] * word[j]`, shifted left by
    /// `i + j` words and accumulated with [`Self::wrapping_add`].
    #[must_use]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut acc = Self::ZERO;
        for i in 0..WORDS {
            if self.words()[i] == 0 {
                continue;
            }
            for j in 0..WORDS - i {
                let product = u64::from(self.words()[i]) * u64::from(rhs.words()[j]);
                let partial = Self::from(product).shl_words(i + j);
                acc = acc.wrapping_add(&partial);
            }
        }
        acc
    }
}

impl Add for U768 {
    type Output = U768;

    fn add(self, rhs: U768) -> U768 {
        self.wrapping_add(&rhs)
    }
}

impl Sub for U768 {
    type Output = U768;

    fn sub(self, rhs: U768) -> U768 {
        self.wrapping_sub(&rhs)
    }
}

impl Mul for U768 {
    type Output = U768;

    fn mul(self, rhs: U768) -> U768 {
        self.wrapping_mul(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_small_values() {
        let a = U768::from(6765u64);
        let b = U768::from(10946u64);
        assert_eq!(a + b, U768::from(17711u64));
    }

    #[test]
    fn add_carries_across_word_boundary() {
        // Lowest word all ones, plus one: carry lands in word[1].
        let a = U768::from(u64::from(u32::MAX));
        let c = a + U768::ONE;
        assert_eq!(c.words()[0], 0);
        assert_eq!(c.words()[1], 1);
        assert!(c.words()[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn add_carries_through_many_words() {
        let c = U768::MAX + U768::ONE;
        assert!(c.is_zero());
    }

    #[test]
    fn sub_borrows_across_word_boundary() {
        // 2^64 - 1 == (2^64) - 1 requires a borrow from word[2].
        let mut words = [0u32; WORDS];
        words[2] = 1;
        let a = U768::from_words(words);
        let c = a - U768::ONE;
        assert_eq!(c, U768::from(u64::MAX));
    }

    #[test]
    fn overflowing_sub_reports_borrow() {
        let (diff, borrow) = U768::ZERO.overflowing_sub(&U768::ONE);
        assert!(borrow);
        assert_eq!(diff, U768::MAX);

        let (diff, borrow) = U768::from(10u64).overflowing_sub(&U768::from(3u64));
        assert!(!borrow);
        assert_eq!(diff, U768::from(7u64));
    }

    #[test]
    fn sub_inverts_add() {
        let a = U768::from(123_456_789u64);
        let b = U768::from(987_654_321u64);
        assert_eq!((a + b) - a, b);
    }

    #[test]
    fn shl_words_moves_and_zero_fills() {
        let v = U768::from(7u64).shl_words(3);
        assert_eq!(v.words()[3], 7);
        assert!(v.words()[..3].iter().all(|&w| w == 0));
    }

    #[test]
    fn shl_words_composes() {
        let x = U768::from(0xDEAD_BEEFu64);
        assert_eq!(x.shl_words(5).shl_words(7), x.shl_words(12));
    }

    #[test]
    fn shl_words_by_width_is_zero() {
        let x = U768::from(1u64);
        assert!(x.shl_words(WORDS).is_zero());
        assert!(x.shl_words(WORDS + 10).is_zero());
        assert!(U768::MAX.shl_words(WORDS).is_zero());
    }

    #[test]
    fn mul_small_values() {
        let a = U768::from(12345u64);
        let b = U768::from(6789u64);
        assert_eq!(a * b, U768::from(83_810_205u64));
    }

    #[test]
    fn mul_identity_and_zero() {
        let a = U768::from(u64::MAX);
        assert_eq!(a * U768::ONE, a);
        assert!((a * U768::ZERO).is_zero());
    }

    #[test]
    fn mul_crosses_word_boundary() {
        // (2^32)(2^32) = 2^64 lands in word[2].
        let a = U768::from(1u64 << 32);
        let c = a * a;
        assert_eq!(c.words()[2], 1);
        assert_eq!(c.words()[0], 0);
        assert_eq!(c.words()[1], 0);
    }

    #[test]
    fn mul_truncates_consistently_with_add() {
        // MAX * MAX mod 2^768 == (2^768 - 1)^2 mod 2^768 == 1
        assert_eq!(U768::MAX * U768::MAX, U768::ONE);
    }

    #[test]
    fn mul_commutes() {
        let a = U768::from(0xFFFF_FFFF_0000_0001u64).shl_words(2);
        let b = U768::from(0x1234_5678_9ABC_DEF0u64).shl_words(11);
        assert_eq!(a * b, b * a);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "subtraction underflow")]
    fn sub_underflow_asserts_in_debug() {
        let _ = U768::ZERO - U768::ONE;
    }
}
