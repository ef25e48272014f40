use num_traits::Zero;

use crate::bigint::chars::from_chars::digit_batch;
use crate::bigint::chars::{InvalidBaseError, ValueTooLargeError};
use crate::bigint::kernel::div_mod_limb;
use crate::bigint::{Limb, Limbs};
use crate::util::result::ResultExtension;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The digits of `value` in `base`, least significant first.
fn digits_reversed<C: Limbs>(value: &C, base: u32) -> Vec<u8> {
    InvalidBaseError::check(base).throw();

    let (batch, power) = digit_batch::<C::Limb>(base);
    let radix = <C::Limb as Limb>::from_low_bits(u128::from(base));
    let mut rest = value.as_limbs()[..value.significant_len()].to_vec();
    let mut digits = Vec::new();
    while !rest.is_empty() {
        let (quotient, mut chunk) = div_mod_limb(&rest, power);
        rest = quotient;
        // Every batch but the most significant one is padded with zeros.
        for _ in 0..batch {
            if rest.is_empty() && chunk.is_zero() {
                break;
            }
            digits.push(DIGITS[(chunk % radix).into_u128() as usize]);
            chunk = chunk / radix;
        }
    }

    if digits.is_empty() {
        digits.push(b'0');
    }
    digits
}

/// Writes the digits of `value` in `base` to the start of `buf`, returning the number of bytes
/// written. Letters are lowercase and zero is written as `"0"`.
///
/// # Errors
/// Returns [`ValueTooLargeError`] without writing anything if `buf` is too short.
///
/// # Panics
/// Panics if `base` is not between 2 and 36.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::chars::to_chars;
/// let mut buf = [0; 8];
/// assert_eq!(to_chars(&mut buf, &[0xee_u8, 0xff], 16), Ok(4));
/// assert_eq!(&buf[..4], b"ffee");
/// assert!(to_chars(&mut buf[..3], &[0xee_u8, 0xff], 16).is_err());
/// ```
pub fn to_chars<C: Limbs>(
    buf: &mut [u8],
    value: &C,
    base: u32,
) -> Result<usize, ValueTooLargeError> {
    let digits = digits_reversed(value, base);
    if digits.len() > buf.len() {
        return Err(ValueTooLargeError {
            needed: digits.len(),
            available: buf.len(),
        });
    }

    for (slot, digit) in buf.iter_mut().zip(digits.iter().rev()) {
        *slot = *digit;
    }
    Ok(digits.len())
}

/// Formats `value` in `base` as a [`String`].
///
/// # Panics
/// Panics if `base` is not between 2 and 36.
pub fn to_string_radix<C: Limbs>(value: &C, base: u32) -> String {
    digits_reversed(value, base).into_iter().rev().map(char::from).collect()
}
