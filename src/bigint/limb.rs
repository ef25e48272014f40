use std::fmt::Debug;
use std::hash::Hash;

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingSub};
use num_traits::{PrimInt, Unsigned};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An unsigned primitive integer used as one digit of a big integer, in base `2^BITS`.
///
/// Everything else about a limb comes from [`num_traits`]; this trait only adds the double-width
/// operations that arithmetic on limb sequences is built out of. It is implemented for `u8`, `u16`,
/// `u32`, `u64` and `usize`, and sealed.
pub trait Limb:
    PrimInt + Unsigned + OverflowingAdd + OverflowingSub + Default + Hash + Debug + sealed::Sealed
{
    /// The width of the limb in bits, `W`.
    const BITS: u32;

    /// Multiplies two limbs into a double-width product, returned as `(low, high)`.
    fn mul_wide(self, rhs: Self) -> (Self, Self);

    /// Divides the double-width value `high * 2^W + low` by `divisor`, returning
    /// `(quotient, remainder)`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero. The quotient is only meaningful if `high < divisor`.
    fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self);

    /// The lowest `W` bits of `value`.
    fn from_low_bits(value: u128) -> Self;

    fn into_u128(self) -> u128;
}

macro_rules! impl_limb {
    ($limb:ty => $wide:ty) => {
        impl sealed::Sealed for $limb {}

        impl Limb for $limb {
            const BITS: u32 = <$limb>::BITS;

            fn mul_wide(self, rhs: Self) -> (Self, Self) {
                let product = self as $wide * rhs as $wide;
                (product as $limb, (product >> <$limb>::BITS) as $limb)
            }

            fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
                let value = ((high as $wide) << <$limb>::BITS) | low as $wide;
                let divisor = divisor as $wide;
                ((value / divisor) as $limb, (value % divisor) as $limb)
            }

            fn from_low_bits(value: u128) -> Self {
                value as $limb
            }

            fn into_u128(self) -> u128 {
                self as u128
            }
        }
    };
    ($limb:ty => $wide:ty, $($a:ty => $b:ty),+) => {
        impl_limb!($limb => $wide);
        impl_limb!($($a => $b),+);
    };
}

impl_limb! {
    u8    => u16,
    u16   => u32,
    u32   => u64,
    u64   => u128,
    usize => u128
}

pub(crate) fn limb_from_bool<L: Limb>(bit: bool) -> L {
    if bit { L::one() } else { L::zero() }
}
