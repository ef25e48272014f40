use num_traits::{One, Zero};

use crate::bigint::chars::{FromCharsError, InvalidBaseError};
use crate::bigint::kernel::slice::mul_limb_add_assign;
use crate::bigint::{Limb, Limbs};
use crate::util::result::ResultExtension;

/// The largest number of digits in `base` whose value always fits in one limb, together with
/// `base` raised to that number.
pub(super) fn digit_batch<L: Limb>(base: u32) -> (usize, L) {
    let max = L::max_value().into_u128();
    let (mut digits, mut power) = (0, 1_u128);
    while power * u128::from(base) <= max {
        power *= u128::from(base);
        digits += 1;
    }
    (digits, L::from_low_bits(power))
}

pub(super) fn digit_value(byte: u8, base: u32) -> Option<u32> {
    char::from(byte).to_digit(base)
}

/// Parses the digits at the start of `text` as an unsigned integer in `base`, storing it in
/// `value` and returning the index just past the last digit.
///
/// Digits are `0-9` followed by `a-z` (or `A-Z`), so base 36 uses the whole alphabet. There is no
/// sign or prefix: parsing stops at the first byte that isn't a digit of `base`.
///
/// Digits are consumed in batches, as many as always fit in one limb at once: the value parsed so
/// far is multiplied by `base` to the length of the batch and the batch's own value is added. Any
/// carry out of a fixed width container marks the result as out of range, while a `Vec` is sized
/// up front to hold every digit.
///
/// # Errors
/// - [`FromCharsError::InvalidArgument`] if `text` doesn't start with a digit.
/// - [`FromCharsError::ResultOutOfRange`] if the digits' value doesn't fit in `value`.
///
/// `value` is only written on success.
///
/// # Panics
/// Panics if `base` is not between 2 and 36.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::chars::{from_chars, FromCharsError};
/// let mut value = [0_u8; 2];
/// assert_eq!(from_chars(b"ffee rest", &mut value, 16), Ok(4));
/// assert_eq!(value, [0xee, 0xff]);
///
/// let too_large = from_chars(b"65536", &mut value, 10);
/// assert_eq!(too_large, Err(FromCharsError::ResultOutOfRange { ptr: 5 }));
/// assert_eq!(from_chars(b"-1", &mut value, 10), Err(FromCharsError::InvalidArgument));
/// assert_eq!(value, [0xee, 0xff]);
/// ```
pub fn from_chars<C: Limbs>(
    text: &[u8],
    value: &mut C,
    base: u32,
) -> Result<usize, FromCharsError> {
    InvalidBaseError::check(base).throw();

    let digits = text.iter().take_while(|&&byte| digit_value(byte, base).is_some()).count();
    if digits == 0 {
        return Err(FromCharsError::InvalidArgument);
    }

    let width = C::Limb::BITS as usize;
    let bits_per_digit = (u32::BITS - (base - 1).leading_zeros()) as usize;
    let mut staged = C::zeroed(digits.saturating_mul(bits_per_digit).div_ceil(width));

    let (batch, _) = digit_batch::<C::Limb>(base);
    let radix = C::Limb::from_low_bits(u128::from(base));
    let mut overflow = false;
    for chunk in text[..digits].chunks(batch) {
        let (scale, part) = chunk.iter().fold(
            (C::Limb::one(), C::Limb::zero()),
            |(scale, part), &byte| {
                let digit = digit_value(byte, base).unwrap_or_default();
                (scale * radix, part * radix + C::Limb::from_low_bits(u128::from(digit)))
            },
        );
        overflow |= !mul_limb_add_assign(staged.as_limbs_mut(), scale, part).is_zero();
    }

    if overflow {
        return Err(FromCharsError::ResultOutOfRange { ptr: digits });
    }
    staged.normalize();
    *value = staged;
    Ok(digits)
}
