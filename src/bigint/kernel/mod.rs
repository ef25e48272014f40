//! Unsigned arithmetic on limb sequences.
//!
//! Every function here is generic over the [`Limbs`](crate::bigint::Limbs) container, so the same
//! code serves fixed width integers (`[L; N]`) and growable ones (`Vec<L>`). Operations that can
//! exceed a fixed width return an [`Overflowing`] rather than panicking or silently truncating.

mod arith;
mod div;
pub(crate) mod slice;
mod tests;

pub use arith::*;
pub use div::*;
