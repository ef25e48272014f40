use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::bigint::big_int::{ParseBigIntError, TrailingCharactersError};
use crate::bigint::chars::{self, FromCharsError, from_chars};
use crate::bigint::kernel::{self, DivMod};
use crate::bigint::{DivideByZeroError, Limb, Limbs, OverflowError};
use crate::util::result::ResultExtension;

/// A signed integer, stored as a sign and an unsigned magnitude over a [`Limbs`] container.
///
/// With the default `Vec<u32>` magnitude the integer grows as needed and only division can fail.
/// With a fixed width magnitude like `[u64; 4]`, every result whose magnitude doesn't fit is
/// rejected with an [`OverflowError`], so a value is never silently truncated. The range is
/// symmetric: `-(2^(W * N) - 1)..=2^(W * N) - 1`.
///
/// Zero is never negative.
///
/// # Examples
/// ```
/// # use standard_polyfill::bigint::BigInt;
/// let a: BigInt = "-123456789012345678901234567890".parse().unwrap();
/// let b: BigInt = BigInt::from(1_000_000_007_i64);
/// assert_eq!((a.clone() / b.clone()).to_string(), "-123456788148148161864");
/// assert_eq!((a % b).to_string(), "-197434842");
/// ```
#[derive(Debug, Clone)]
pub struct BigInt<C: Limbs = Vec<u32>> {
    negative: bool,
    magnitude: C,
}

impl<C: Limbs> BigInt<C> {
    pub fn zero() -> BigInt<C> {
        BigInt {
            negative: false,
            magnitude: C::zeroed(0),
        }
    }

    /// Creates an integer from its sign and magnitude. A negative zero becomes zero.
    pub fn from_parts(negative: bool, magnitude: C) -> BigInt<C> {
        BigInt {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn into_parts(self) -> (bool, C) {
        (self.negative, self.magnitude)
    }

    pub fn magnitude(&self) -> &C {
        &self.magnitude
    }

    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn abs(self) -> BigInt<C> {
        BigInt::from_parts(false, self.magnitude)
    }

    /// Converts from an `i128`, failing if the magnitude doesn't fit in `C`.
    pub fn try_from_i128(value: i128) -> Result<BigInt<C>, OverflowError> {
        let magnitude = kernel::from_u128::<C>(value.unsigned_abs()).into_result()?;
        Ok(BigInt::from_parts(value < 0, magnitude))
    }

    /// Converts into an `i128`, if the value is in range.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = kernel::to_u128(&self.magnitude)?;
        if self.negative {
            0_i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    /// # Errors
    /// Returns [`OverflowError`] if the magnitude of the sum doesn't fit in `C`.
    pub fn try_add(&self, rhs: &BigInt<C>) -> Result<BigInt<C>, OverflowError> {
        if self.negative == rhs.negative {
            let sum = kernel::add(&self.magnitude, &rhs.magnitude).into_result()?;
            return Ok(BigInt::from_parts(self.negative, sum));
        }

        // Opposite signs: the smaller magnitude is subtracted from the larger, which can't wrap.
        let (larger, smaller) = match kernel::compare(&self.magnitude, &rhs.magnitude) {
            Ordering::Less => (rhs, self),
            _ => (self, rhs),
        };
        let difference = kernel::sub(&larger.magnitude, &smaller.magnitude).value;
        Ok(BigInt::from_parts(larger.negative, difference))
    }

    /// # Errors
    /// Returns [`OverflowError`] if the magnitude of the difference doesn't fit in `C`.
    pub fn try_sub(&self, rhs: &BigInt<C>) -> Result<BigInt<C>, OverflowError> {
        self.try_add(&-rhs.clone())
    }

    /// # Errors
    /// Returns [`OverflowError`] if the magnitude of the product doesn't fit in `C`.
    pub fn try_mul(&self, rhs: &BigInt<C>) -> Result<BigInt<C>, OverflowError> {
        let product = kernel::multiply(&self.magnitude, &rhs.magnitude).into_result()?;
        Ok(BigInt::from_parts(self.negative != rhs.negative, product))
    }

    /// Truncating division, returning the quotient and the remainder. The quotient is rounded
    /// toward zero and the remainder has the sign of `self`, like the primitive integers.
    ///
    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_div_rem(
        &self,
        rhs: &BigInt<C>,
    ) -> Result<(BigInt<C>, BigInt<C>), DivideByZeroError> {
        let DivMod {
            quotient,
            remainder,
        } = kernel::try_div_mod(&self.magnitude, &rhs.magnitude)?;
        Ok((
            BigInt::from_parts(self.negative != rhs.negative, quotient),
            BigInt::from_parts(self.negative, remainder),
        ))
    }

    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_div(&self, rhs: &BigInt<C>) -> Result<BigInt<C>, DivideByZeroError> {
        self.try_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_rem(&self, rhs: &BigInt<C>) -> Result<BigInt<C>, DivideByZeroError> {
        self.try_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Parses an integer in `base`, made of an optional `-` followed by digits and nothing else.
    ///
    /// # Errors
    /// - [`ParseBigIntError::FromChars`] if there are no digits or their value doesn't fit.
    /// - [`ParseBigIntError::TrailingCharacters`] if anything follows the digits.
    ///
    /// Error positions are indices into `text`.
    ///
    /// # Panics
    /// Panics if `base` is not between 2 and 36.
    ///
    /// # Examples
    /// ```
    /// # use standard_polyfill::bigint::BigInt;
    /// let value = BigInt::<[u8; 2]>::from_str_radix("-ffff", 16).unwrap();
    /// assert_eq!(value.to_i128(), Some(-0xffff));
    /// assert!(BigInt::<[u8; 2]>::from_str_radix("10000", 16).is_err());
    /// assert!(BigInt::<[u8; 2]>::from_str_radix("12 ", 16).is_err());
    /// ```
    pub fn from_str_radix(text: &str, base: u32) -> Result<BigInt<C>, ParseBigIntError> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, text),
        };
        let offset = text.len() - digits.len();

        let mut magnitude = C::zeroed(0);
        let parsed = from_chars(digits.as_bytes(), &mut magnitude, base).map_err(|error| {
            match error {
                FromCharsError::ResultOutOfRange { ptr } => {
                    FromCharsError::ResultOutOfRange { ptr: ptr + offset }
                }
                error => error,
            }
        })?;

        if parsed != digits.len() {
            return Err(TrailingCharactersError {
                index: parsed + offset,
            }
            .into());
        }
        Ok(BigInt::from_parts(negative, magnitude))
    }

    /// Formats the integer in `base`, with a leading `-` if it is negative.
    ///
    /// # Panics
    /// Panics if `base` is not between 2 and 36.
    pub fn to_string_radix(&self, base: u32) -> String {
        let digits = chars::to_string_radix(&self.magnitude, base);
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

impl<L: Limb> From<i64> for BigInt<Vec<L>> {
    fn from(value: i64) -> BigInt<Vec<L>> {
        let magnitude = kernel::from_u128(u128::from(value.unsigned_abs())).value;
        BigInt::from_parts(value < 0, magnitude)
    }
}

impl<L: Limb> From<u64> for BigInt<Vec<L>> {
    fn from(value: u64) -> BigInt<Vec<L>> {
        BigInt::from_parts(false, kernel::from_u128(u128::from(value)).value)
    }
}

impl<C: Limbs> Default for BigInt<C> {
    fn default() -> BigInt<C> {
        BigInt::zero()
    }
}

impl<C: Limbs> PartialEq for BigInt<C> {
    fn eq(&self, other: &BigInt<C>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Limbs> Eq for BigInt<C> {}

impl<C: Limbs> PartialOrd for BigInt<C> {
    fn partial_cmp(&self, other: &BigInt<C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Limbs> Ord for BigInt<C> {
    fn cmp(&self, other: &BigInt<C>) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => kernel::compare(&self.magnitude, &other.magnitude),
            (true, true) => kernel::compare(&other.magnitude, &self.magnitude),
        }
    }
}

impl<C: Limbs> Display for BigInt<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &chars::to_string_radix(&self.magnitude, 10))
    }
}

impl<C: Limbs> FromStr for BigInt<C> {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<BigInt<C>, ParseBigIntError> {
        BigInt::from_str_radix(s, 10)
    }
}

impl<C: Limbs> Neg for BigInt<C> {
    type Output = BigInt<C>;

    fn neg(self) -> BigInt<C> {
        BigInt::from_parts(!self.negative, self.magnitude)
    }
}

macro_rules! impl_op {
    ($op:ident, $method:ident => $try_method:ident) => {
        impl<C: Limbs> $op for BigInt<C> {
            type Output = BigInt<C>;

            #[track_caller]
            fn $method(self, rhs: BigInt<C>) -> BigInt<C> {
                self.$try_method(&rhs).throw()
            }
        }
    };
    ($op:ident, $method:ident => $try_method:ident, $($a:ident, $b:ident => $c:ident),+) => {
        impl_op!($op, $method => $try_method);
        impl_op!($($a, $b => $c),+);
    };
}

impl_op! {
    Add, add => try_add,
    Sub, sub => try_sub,
    Mul, mul => try_mul,
    Div, div => try_div,
    Rem, rem => try_rem
}
