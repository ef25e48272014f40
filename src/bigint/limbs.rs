use std::fmt::Debug;

use num_traits::Zero;

use crate::bigint::Limb;

/// A little-endian sequence of limbs, least significant first, holding an unsigned integer.
///
/// Two kinds of container are supported:
/// - `[L; N]` is fixed width. Every operation keeps the width at `N` limbs and reports results
///   that don't fit through an overflow flag.
/// - `Vec<L>` is dynamic. Results are allocated as wide as they need to be and normalized so that
///   the most significant limb is never zero (zero is the empty `Vec`).
///
/// Limbs past the end of a container are implicitly zero, so containers of different lengths
/// compare and combine as if zero-extended.
pub trait Limbs: Clone + Debug {
    type Limb: Limb;

    /// A zero value with room for `len` limbs. Fixed width containers ignore `len`.
    fn zeroed(len: usize) -> Self;

    fn as_limbs(&self) -> &[Self::Limb];

    fn as_limbs_mut(&mut self) -> &mut [Self::Limb];

    /// Drops high zero limbs, if the container can change its length.
    fn normalize(&mut self);

    fn len(&self) -> usize {
        self.as_limbs().len()
    }

    /// The number of limbs up to and including the most significant non-zero one.
    fn significant_len(&self) -> usize {
        significant_len(self.as_limbs())
    }

    fn is_zero(&self) -> bool {
        self.as_limbs().iter().all(Zero::is_zero)
    }
}

impl<L: Limb, const N: usize> Limbs for [L; N] {
    type Limb = L;

    fn zeroed(_len: usize) -> Self {
        [L::zero(); N]
    }

    fn as_limbs(&self) -> &[L] {
        self
    }

    fn as_limbs_mut(&mut self) -> &mut [L] {
        self
    }

    fn normalize(&mut self) {}
}

impl<L: Limb> Limbs for Vec<L> {
    type Limb = L;

    fn zeroed(len: usize) -> Self {
        vec![L::zero(); len]
    }

    fn as_limbs(&self) -> &[L] {
        self
    }

    fn as_limbs_mut(&mut self) -> &mut [L] {
        self
    }

    fn normalize(&mut self) {
        self.truncate(significant_len(self));
    }
}

pub(crate) fn significant_len<L: Limb>(limbs: &[L]) -> usize {
    limbs.iter().rposition(|limb| !limb.is_zero()).map_or(0, |index| index + 1)
}
