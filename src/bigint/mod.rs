//! Arbitrary and fixed precision integers built on sequences of limbs.
//!
//! # Purpose
//! The [`kernel`] is the unsigned arithmetic that a big integer type actually needs: comparison,
//! addition and subtraction with carries, multiplication with exact overflow detection, shifts and
//! long division. [`chars`] converts to and from digit strings and [`BigInt`] puts a sign on top.
//!
//! # Method
//! A number is a little-endian sequence of [`Limb`]s, held in anything implementing [`Limbs`]. A
//! fixed size array gives a fixed width integer, where every operation reports overflow as a value
//! instead of panicking. A [`Vec`] gives an integer that grows as needed.
//!
//! Division doesn't rely on a double-width divide of the top limbs. Each quotient limb is found by
//! binary search ([`kernel::div1`]), so the cost is `W` multiplications per limb of the dividend,
//! but the only primitive it needs is the multiplication that's already there.

pub mod chars;
pub mod kernel;

mod big_int;
mod error;
mod limb;
mod limbs;

pub use big_int::*;
pub use error::*;
pub use limb::Limb;
pub use limbs::Limbs;
