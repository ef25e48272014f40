//! Arithmetic on raw limb slices. Every function writes a result of exactly `out.len()` limbs and
//! reports whether the exact result needed more.

use std::cmp::Ordering;

use crate::bigint::limb::{Limb, limb_from_bool};
use crate::bigint::limbs::significant_len;

fn limb_at<L: Limb>(limbs: &[L], index: usize) -> L {
    limbs.get(index).copied().unwrap_or_else(L::zero)
}

/// Compares two limb sequences as if zero-extended to the same length.
pub(crate) fn cmp_limbs<L: Limb>(lhs: &[L], rhs: &[L]) -> Ordering {
    let (lhs, rhs) = (&lhs[..significant_len(lhs)], &rhs[..significant_len(rhs)]);
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// The number of bits up to and including the most significant set bit.
pub(crate) fn bit_len<L: Limb>(limbs: &[L]) -> usize {
    match significant_len(limbs) {
        0 => 0,
        len => len * L::BITS as usize - limbs[len - 1].leading_zeros() as usize,
    }
}

/// `out = lhs + rhs`, returning the carry out of `out`.
pub(crate) fn add_into<L: Limb>(lhs: &[L], rhs: &[L], out: &mut [L]) -> bool {
    let mut carry = false;
    for (index, slot) in out.iter_mut().enumerate() {
        let (sum, first) = limb_at(lhs, index).overflowing_add(&limb_at(rhs, index));
        let (sum, second) = sum.overflowing_add(&limb_from_bool(carry));
        *slot = sum;
        carry = first || second;
    }
    carry || significant_len(lhs) > out.len() || significant_len(rhs) > out.len()
}

/// `out = lhs - rhs` modulo `2^(W * out.len())`, returning the borrow out of `out`.
pub(crate) fn sub_into<L: Limb>(lhs: &[L], rhs: &[L], out: &mut [L]) -> bool {
    let mut borrow = false;
    for (index, slot) in out.iter_mut().enumerate() {
        let (difference, first) = limb_at(lhs, index).overflowing_sub(&limb_at(rhs, index));
        let (difference, second) = difference.overflowing_sub(&limb_from_bool(borrow));
        *slot = difference;
        borrow = first || second;
    }
    borrow
}

/// `value -= rhs` in place, returning the borrow.
pub(crate) fn sub_assign<L: Limb>(value: &mut [L], rhs: &[L]) -> bool {
    let mut borrow = false;
    for (index, limb) in value.iter_mut().enumerate() {
        let (difference, first) = limb.overflowing_sub(&limb_at(rhs, index));
        let (difference, second) = difference.overflowing_sub(&limb_from_bool(borrow));
        *limb = difference;
        borrow = first || second;
    }
    borrow
}

/// Schoolbook multiplication, `out = lhs * rhs`. Returns true iff the exact product doesn't fit.
///
/// The overflow flag is exact: either some partial product lands at or above `out.len()`, or the
/// carry out of the top limb of a row is non-zero.
pub(crate) fn mul_into<L: Limb>(lhs: &[L], rhs: &[L], out: &mut [L]) -> bool {
    out.fill(L::zero());
    let (lhs, rhs) = (&lhs[..significant_len(lhs)], &rhs[..significant_len(rhs)]);
    if lhs.is_empty() || rhs.is_empty() {
        return false;
    }

    let len = out.len();
    let mut overflow = lhs.len() + rhs.len() - 2 >= len;
    for (i, &x) in lhs.iter().enumerate().take(len) {
        let mut carry = L::zero();
        for (j, &y) in rhs.iter().enumerate().take(len - i) {
            let (low, high) = x.mul_wide(y);
            let (sum, first) = out[i + j].overflowing_add(&low);
            let (sum, second) = sum.overflowing_add(&carry);
            out[i + j] = sum;
            carry = high + limb_from_bool(first) + limb_from_bool(second);
        }

        match out.get_mut(i + rhs.len()) {
            Some(slot) => *slot = carry,
            None => overflow |= !carry.is_zero(),
        }
    }
    overflow
}

/// `out = lhs * factor`, returning true iff the product doesn't fit.
pub(crate) fn mul_limb_into<L: Limb>(lhs: &[L], factor: L, out: &mut [L]) -> bool {
    let mut carry = L::zero();
    for (index, slot) in out.iter_mut().enumerate() {
        let (low, high) = limb_at(lhs, index).mul_wide(factor);
        let (sum, overflow) = low.overflowing_add(&carry);
        *slot = sum;
        carry = high + limb_from_bool(overflow);
    }
    !carry.is_zero() || (!factor.is_zero() && significant_len(lhs) > out.len())
}

/// `value = value * factor + addend` in place, returning the limb carried out of the top.
pub(crate) fn mul_limb_add_assign<L: Limb>(value: &mut [L], factor: L, addend: L) -> L {
    let mut carry = addend;
    for limb in value {
        let (low, high) = limb.mul_wide(factor);
        let (sum, overflow) = low.overflowing_add(&carry);
        *limb = sum;
        carry = high + limb_from_bool(overflow);
    }
    carry
}

/// `value /= divisor` in place, returning the remainder.
pub(crate) fn div_limb_assign<L: Limb>(value: &mut [L], divisor: L) -> L {
    let mut remainder = L::zero();
    for limb in value.iter_mut().rev() {
        let (quotient, rest) = L::div_wide(remainder, *limb, divisor);
        *limb = quotient;
        remainder = rest;
    }
    remainder
}

/// `out = value << bits`, returning true iff a set bit is shifted past the top of `out`.
pub(crate) fn shl_into<L: Limb>(value: &[L], bits: usize, out: &mut [L]) -> bool {
    let width = L::BITS as usize;
    let (limbs, offset) = (bits / width, bits % width);
    for (index, slot) in out.iter_mut().enumerate() {
        *slot = match index.checked_sub(limbs) {
            None => L::zero(),
            Some(source) if offset == 0 => limb_at(value, source),
            Some(source) => {
                let carried = match source.checked_sub(1) {
                    Some(below) => limb_at(value, below) >> (width - offset),
                    None => L::zero(),
                };
                (limb_at(value, source) << offset) | carried
            }
        };
    }

    let len = bit_len(value);
    len > 0 && len.saturating_add(bits) > out.len() * width
}

/// `out = value >> bits`.
pub(crate) fn shr_into<L: Limb>(value: &[L], bits: usize, out: &mut [L]) {
    let width = L::BITS as usize;
    let (limbs, offset) = (bits / width, bits % width);
    for (index, slot) in out.iter_mut().enumerate() {
        let source = index.saturating_add(limbs);
        *slot = if offset == 0 {
            limb_at(value, source)
        } else {
            let carried = limb_at(value, source.saturating_add(1)) << (width - offset);
            (limb_at(value, source) >> offset) | carried
        };
    }
}
