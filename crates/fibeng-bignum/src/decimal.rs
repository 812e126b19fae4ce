//! Binary-to-decimal conversion by bit-serial double-and-add.
//!
//! The converter walks the bits of the value from most to least significant.
//! For each bit it doubles a fixed decimal digit buffer and folds the bit in
//! as the initial carry, so after the last bit the buffer holds the exact
//! base-10 representation.

use crate::uint::{U768, WORD_BITS};

/// Maximum decimal length of a 768-bit magnitude:
/// ceil(768 * log10(2)) = ceil(231.19...) = 232 digits.
pub const MAX_DECIMAL_DIGITS: usize = 232;

/// Render `v` as its base-10 ASCII representation.
///
/// No leading zeros are produced except for the value zero itself, which
/// renders as `"0"`. Total function; never fails.
///
/// # Example
/// ```
/// use fibeng_bignum::{to_decimal, U768};
/// assert_eq!(to_decimal(&U768::from(6765u64)), "6765");
/// assert_eq!(to_decimal(&U768::ZERO), "0");
/// ```
#[must_use]
pub fn to_decimal(v: &U768) -> String {
    let Some(top) = v.top_word() else {
        return "0".to_owned();
    };

    // Digits in big-endian order, value 0..=9 each.
    let mut digits = [0u8; MAX_DECIMAL_DIGITS];

    for index in (0..=top).rev() {
        let word = v.words()[index];
        for bit in (0..WORD_BITS).rev() {
            // Double every digit, seeding the carry with the incoming bit.
            let mut carry = ((word >> bit) & 1) as u8;
            for d in digits.iter_mut().rev() {
                let mut doubled = 2 * *d + carry;
                if doubled >= 10 {
                    doubled -= 10;
                    carry = 1;
                } else {
                    carry = 0;
                }
                *d = doubled;
            }
        }
    }

    // v is nonzero here, so at least one digit is set.
    let first = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(MAX_DECIMAL_DIGITS - 1);
    digits[first..].iter().map(|&d| char::from(b'0' + d)).collect()
}
