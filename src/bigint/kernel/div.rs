use std::cmp::Ordering;

use log::trace;
use num_traits::Zero;

use crate::bigint::kernel::slice::{cmp_limbs, div_limb_assign, mul_limb_into, sub_assign};
use crate::bigint::{DivideByZeroError, Limb, Limbs};
use crate::util::result::ResultExtension;

/// One step of long division: a single quotient limb and the product `rhs * quotient` that has
/// to be subtracted from the running remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotientLimb<C: Limbs> {
    pub quotient: C::Limb,
    pub product: C,
}

/// The quotient and remainder of a division, both over the same container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivMod<C> {
    pub quotient: C,
    pub remainder: C,
}

/// Finds the largest single limb `q` with `rhs * q <= lhs`, by binary search over the bits of `q`
/// from the most significant down.
///
/// The result is the exact quotient `floor(lhs / rhs)` as long as that fits in one limb, i.e.
/// `lhs < rhs * 2^W`. Long division only ever calls it that way. If `lhs < rhs` the quotient is
/// zero and so is the product; the product is what gets subtracted, not a remainder.
///
/// # Time Complexity
/// `W` multiplications of `rhs` by a single limb.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::div1;
/// let step = div1(&[0x10_u8, 0x00], &[0x03, 0x00]);
/// assert_eq!(step.quotient, 5);
/// assert_eq!(step.product, [0x0f, 0x00]);
/// ```
pub fn div1<C: Limbs>(lhs: &C, rhs: &C) -> QuotientLimb<C> {
    let mut product = C::zeroed(rhs.len() + 1);
    let quotient = div1_limbs(lhs.as_limbs(), rhs.as_limbs(), product.as_limbs_mut());
    product.normalize();
    QuotientLimb { quotient, product }
}

pub(crate) fn div1_limbs<L: Limb>(lhs: &[L], rhs: &[L], product: &mut [L]) -> L {
    match cmp_limbs(lhs, rhs) {
        Ordering::Less => {
            product.fill(L::zero());
            return L::zero();
        }
        Ordering::Equal => {
            mul_limb_into(rhs, L::one(), product);
            return L::one();
        }
        Ordering::Greater => (),
    }

    let mut quotient = L::zero();
    let mut step = L::one() << (L::BITS as usize - 1);
    while !step.is_zero() {
        let candidate = quotient | step;
        let overflow = mul_limb_into(rhs, candidate, product);
        if !overflow && cmp_limbs(product, lhs) != Ordering::Greater {
            quotient = candidate;
        }
        step = step >> 1;
    }

    mul_limb_into(rhs, quotient, product);
    quotient
}

/// Divides `lhs` by `rhs`, returning the truncated quotient and the remainder.
///
/// This is schoolbook long division one limb at a time, from the most significant limb of `lhs`
/// down. The running remainder is shifted left by one limb, the next limb of `lhs` is brought in,
/// [`div1`] finds the next quotient limb and its product is subtracted. The running remainder is
/// kept one limb wider than the divisor, so it never overflows, even for fixed width containers.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of significant limbs in `lhs`.
/// - `m`: The number of significant limbs in `rhs`.
/// - `W`: The width of a limb in bits.
///
/// `O(n * m * W)`. Two scratch buffers of `m + 1` limbs are allocated.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::try_div_mod;
/// # use standard_polyfill::bigint::DivideByZeroError;
/// let result = try_div_mod(&[0x10_u8, 0x00], &[0x03, 0x00]).unwrap();
/// assert_eq!(result.quotient, [0x05, 0x00]);
/// assert_eq!(result.remainder, [0x01, 0x00]);
///
/// assert_eq!(try_div_mod(&vec![1_u32], &vec![]), Err(DivideByZeroError));
/// ```
pub fn try_div_mod<C: Limbs>(lhs: &C, rhs: &C) -> Result<DivMod<C>, DivideByZeroError> {
    let divisor = &rhs.as_limbs()[..rhs.significant_len()];
    if divisor.is_empty() {
        return Err(DivideByZeroError);
    }
    let dividend = &lhs.as_limbs()[..lhs.significant_len()];
    let width = divisor.len();
    trace!("long division of {} limbs by {width} limbs", dividend.len());

    let mut quotient = C::zeroed(dividend.len());
    let mut remainder = vec![C::Limb::zero(); width + 1];
    let mut product = vec![C::Limb::zero(); width + 1];

    for (index, &limb) in dividend.iter().enumerate().rev() {
        remainder.copy_within(..width, 1);
        remainder[0] = limb;
        let step = div1_limbs(&remainder, divisor, &mut product);
        quotient.as_limbs_mut()[index] = step;
        sub_assign(&mut remainder, &product);
    }

    let mut rest = C::zeroed(width);
    rest.as_limbs_mut()[..width].copy_from_slice(&remainder[..width]);
    quotient.normalize();
    rest.normalize();
    Ok(DivMod {
        quotient,
        remainder: rest,
    })
}

/// [`try_div_mod`], panicking on division by zero.
///
/// # Panics
/// Panics if `rhs` is zero.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::kernel::div_mod;
/// let result = div_mod(&vec![0_u8, 0, 1], &vec![7]);
/// assert_eq!(result.quotient, vec![0x92, 0x24]);
/// assert_eq!(result.remainder, vec![0x02]);
/// ```
pub fn div_mod<C: Limbs>(lhs: &C, rhs: &C) -> DivMod<C> {
    try_div_mod(lhs, rhs).throw()
}

/// Divides `value` by a single limb, returning the quotient and the remainder.
///
/// # Panics
/// Panics if `divisor` is zero.
pub fn div_mod_limb<C: Limbs>(value: &C, divisor: C::Limb) -> (C, C::Limb) {
    assert!(!divisor.is_zero(), "{}", DivideByZeroError);

    let mut quotient = value.clone();
    let remainder = div_limb_assign(quotient.as_limbs_mut(), divisor);
    quotient.normalize();
    (quotient, remainder)
}

