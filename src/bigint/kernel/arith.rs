use std::cmp::Ordering;

use crate::bigint::kernel::slice::{
    add_into, bit_len, cmp_limbs, mul_into, shl_into, shr_into, sub_into,
};
use crate::bigint::{Limb, Limbs, OverflowError};

/// The result of an operation that can exceed the width of a fixed width container.
///
/// If `overflow` is set, `value` holds the exact result modulo `2^(W * N)`. Dynamic containers
/// grow instead, so for them `overflow` is only ever set by [`sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overflowing<C> {
    pub value: C,
    pub overflow: bool,
}

impl<C> Overflowing<C> {
    /// Converts into a [`Result`], rejecting any value produced with `overflow` set.
    pub fn into_result(self) -> Result<C, OverflowError> {
        if self.overflow {
            Err(OverflowError)
        } else {
            Ok(self.value)
        }
    }
}

/// Compares two limb sequences from the most significant limb down, treating missing high limbs
/// as zero.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use standard_polyfill::bigint::kernel::compare;
/// assert_eq!(compare(&[0x00_u8, 0x01], &[0xff, 0x00]), Ordering::Greater);
/// assert_eq!(compare(&vec![7_u32], &vec![7, 0, 0]), Ordering::Equal);
/// ```
pub fn compare<C: Limbs>(lhs: &C, rhs: &C) -> Ordering {
    cmp_limbs(lhs.as_limbs(), rhs.as_limbs())
}

/// Adds two limb sequences with carry propagation.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::add;
/// let sum = add(&[0xff_u8, 0x01], &[0x01, 0x00]);
/// assert_eq!(sum.value, [0x00, 0x02]);
/// assert!(!sum.overflow);
///
/// let wrapped = add(&[0xff_u8, 0xff], &[0x02, 0x00]);
/// assert_eq!(wrapped.value, [0x01, 0x00]);
/// assert!(wrapped.overflow);
/// ```
pub fn add<C: Limbs>(lhs: &C, rhs: &C) -> Overflowing<C> {
    let mut value = C::zeroed(lhs.len().max(rhs.len()) + 1);
    let overflow = add_into(lhs.as_limbs(), rhs.as_limbs(), value.as_limbs_mut());
    value.normalize();
    Overflowing { value, overflow }
}

/// Subtracts `rhs` from `lhs` with borrow propagation.
///
/// If `lhs < rhs` the result wraps around as two's complement and `overflow` is set. For a
/// dynamic container the wrap happens at the width of the longer operand.
pub fn sub<C: Limbs>(lhs: &C, rhs: &C) -> Overflowing<C> {
    let mut value = C::zeroed(lhs.len().max(rhs.len()));
    let overflow = sub_into(lhs.as_limbs(), rhs.as_limbs(), value.as_limbs_mut());
    value.normalize();
    Overflowing { value, overflow }
}

/// `0 - value`, the two's complement negation at the width of `value`.
pub fn wrapping_neg<C: Limbs>(value: &C) -> C {
    let mut negated = C::zeroed(value.len());
    sub_into(&[], value.as_limbs(), negated.as_limbs_mut());
    negated.normalize();
    negated
}

/// Multiplies two limb sequences.
///
/// For fixed width containers `overflow` is exact: it is set if and only if the true product is at
/// least `2^(W * N)`, with `value` holding the product modulo `2^(W * N)`.
///
/// # Time Complexity
/// `O(n * m)` for operands of `n` and `m` significant limbs.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::multiply;
/// let product = multiply(&[0x10_u8, 0x00], &[0x10, 0x00]);
/// assert_eq!(product.value, [0x00, 0x01]);
/// assert!(!product.overflow);
///
/// let product = multiply(&[0x00_u8, 0x01], &[0x00, 0x01]);
/// assert_eq!(product.value, [0x00, 0x00]);
/// assert!(product.overflow);
/// ```
pub fn multiply<C: Limbs>(lhs: &C, rhs: &C) -> Overflowing<C> {
    let mut value = C::zeroed(lhs.len() + rhs.len());
    let overflow = mul_into(lhs.as_limbs(), rhs.as_limbs(), value.as_limbs_mut());
    value.normalize();
    Overflowing { value, overflow }
}

/// Shifts `value` left by `bits`. `overflow` is set if any set bit leaves a fixed width container.
pub fn shift_left<C: Limbs>(value: &C, bits: usize) -> Overflowing<C> {
    if value.is_zero() {
        return Overflowing {
            value: C::zeroed(0),
            overflow: false,
        };
    }

    let width = <C::Limb as Limb>::BITS as usize;
    let mut shifted = C::zeroed(value.len() + bits.div_ceil(width));
    let overflow = shl_into(value.as_limbs(), bits, shifted.as_limbs_mut());
    shifted.normalize();
    Overflowing {
        value: shifted,
        overflow,
    }
}

/// Shifts `value` right by `bits`, discarding the bits shifted out.
pub fn shift_right<C: Limbs>(value: &C, bits: usize) -> C {
    let mut shifted = C::zeroed(value.len());
    shr_into(value.as_limbs(), bits, shifted.as_limbs_mut());
    shifted.normalize();
    shifted
}

/// Converts a `u128` into a limb sequence.
pub fn from_u128<C: Limbs>(value: u128) -> Overflowing<C> {
    let width = <C::Limb as Limb>::BITS;
    let mut limbs = C::zeroed(u128::BITS.div_ceil(width) as usize);
    let mut rest = value;
    for limb in limbs.as_limbs_mut() {
        *limb = <C::Limb as Limb>::from_low_bits(rest);
        rest >>= width;
    }
    limbs.normalize();
    Overflowing {
        value: limbs,
        overflow: rest != 0,
    }
}

/// Converts a limb sequence into a `u128`, if it fits.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::to_u128;
/// assert_eq!(to_u128(&[0x34_u8, 0x12]), Some(0x1234));
/// assert_eq!(to_u128(&[u64::MAX; 3]), None);
/// ```
pub fn to_u128<C: Limbs>(value: &C) -> Option<u128> {
    let limbs = value.as_limbs();
    if bit_len(limbs) > u128::BITS as usize {
        return None;
    }

    let width = <C::Limb as Limb>::BITS;
    let significant = &limbs[..value.significant_len()];
    Some(significant.iter().rev().fold(0, |acc, limb| (acc << width) | limb.into_u128()))
}

/// Returns true if every limb of `value` is zero.
pub fn is_zero<C: Limbs>(value: &C) -> bool {
    value.is_zero()
}
