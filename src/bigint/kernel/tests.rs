#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;
use crate::bigint::DivideByZeroError;
use crate::util::panic::assert_panics;

fn quad(value: u64) -> [u16; 4] {
    [0, 16, 32, 48].map(|shift| (value >> shift) as u16)
}

fn from_quad(limbs: [u16; 4]) -> u64 {
    limbs.iter().rev().fold(0, |acc, &limb| (acc << 16) | u64::from(limb))
}

#[test]
fn test_compare() {
    assert_eq!(compare(&[0x01_u8, 0x02], &[0xff, 0x01]), Ordering::Greater);
    assert_eq!(compare(&[0xff_u8, 0x01], &[0x01, 0x02]), Ordering::Less);
    assert_eq!(compare(&[0x33_u8, 0x44], &[0x33, 0x44]), Ordering::Equal);
    assert_eq!(
        compare(&vec![5_u32, 1], &vec![5, 1, 0, 0]),
        Ordering::Equal,
        "Missing high limbs should compare as zero."
    );
    assert_eq!(compare(&vec![0_u32, 0, 1], &vec![u32::MAX, u32::MAX]), Ordering::Greater);
    assert_eq!(compare(&Vec::<u8>::new(), &vec![0]), Ordering::Equal);
}

#[test]
fn test_add_carries() {
    let sum = add(&[0xff_u8, 0xfe], &[0x01, 0x00]);
    assert_eq!(sum.value, [0x00, 0xff]);
    assert!(!sum.overflow);

    let sum = add(&[0x01_u8, 0xff], &[0xff, 0x00]);
    assert_eq!(sum.value, [0x00, 0x00]);
    assert!(sum.overflow, "A carry out of the top limb should be reported.");

    let sum = add(&vec![u16::MAX, u16::MAX], &vec![1]);
    assert_eq!(sum.value, vec![0, 0, 1], "Dynamic containers should grow instead.");
    assert!(!sum.overflow);
}

#[test]
fn test_sub_wraps() {
    let difference = sub(&[0x00_u8, 0x01], &[0x01, 0x00]);
    assert_eq!(difference.value, [0xff, 0x00]);
    assert!(!difference.overflow);

    let difference = sub(&[0x00_u8, 0x00], &[0x01, 0x00]);
    assert_eq!(difference.value, [0xff, 0xff], "Subtraction should wrap as two's complement.");
    assert!(difference.overflow);

    let difference = sub(&vec![0_u32, 1], &vec![1]);
    assert_eq!(difference.value, vec![u32::MAX], "The result should be normalized.");
}

#[test]
fn test_wrapping_neg() {
    assert_eq!(wrapping_neg(&[0x01_u8, 0x00]), [0xff, 0xff]);
    assert_eq!(wrapping_neg(&[0x00_u8, 0x00]), [0x00, 0x00]);
    assert_eq!(wrapping_neg(&[0x00_u8, 0x80]), [0x00, 0x80]);

    let value = [0x34_u8, 0x12];
    let sum = add(&value, &wrapping_neg(&value));
    assert_eq!(sum.value, [0, 0], "x + (-x) should wrap to zero.");
}

#[test]
fn test_multiply_overflow_boundary() {
    let cases: [(u64, u64); 6] = [
        (1 << 32, 1 << 32),
        ((1 << 32) - 1, (1 << 32) + 1),
        (u64::MAX, 1),
        (u64::MAX, 2),
        (0, u64::MAX),
        (0xffff, 0x1_0001_0001_0001),
    ];

    for (a, b) in cases {
        let exact = u128::from(a) * u128::from(b);
        let product = multiply(&quad(a), &quad(b));
        assert_eq!(from_quad(product.value), exact as u64, "Wrong product for {a} * {b}.");
        assert_eq!(product.overflow, exact > u128::from(u64::MAX), "Wrong overflow for {a} * {b}.");
    }
}

#[test]
fn test_multiply_dynamic() {
    let product = multiply(&vec![u32::MAX, u32::MAX], &vec![u32::MAX, u32::MAX]);
    assert_eq!(to_u128(&product.value), Some(u128::from(u64::MAX) * u128::from(u64::MAX)));
    assert!(!product.overflow);
    assert!(multiply(&vec![7_u8], &Vec::new()).value.is_empty());
}

#[test]
fn test_shifts() {
    let shifted = shift_left(&[0x81_u8, 0x00], 1);
    assert_eq!(shifted.value, [0x02, 0x01]);
    assert!(!shifted.overflow);

    let shifted = shift_left(&[0x00_u8, 0x80], 1);
    assert_eq!(shifted.value, [0x00, 0x00]);
    assert!(shifted.overflow, "The top bit should be reported when shifted out.");

    let shifted = shift_left(&[0x01_u8, 0x00], 8);
    assert_eq!(shifted.value, [0x00, 0x01], "A shift by one limb should move whole limbs.");
    assert!(shift_left(&[0x01_u8, 0x00], 16).overflow);
    assert!(!shift_left(&[0x00_u8, 0x00], 100).overflow, "Zero can be shifted any distance.");

    let grown = shift_left(&vec![0x80_u8], 9);
    assert_eq!(grown.value, vec![0x00, 0x00, 0x01]);
    assert!(!grown.overflow);

    let zero = shift_left(&Vec::<u64>::new(), usize::MAX / 2);
    assert_eq!(zero.value, Vec::<u64>::new(), "Zero shouldn't grow, however far it's shifted.");
    assert!(!zero.overflow);
    assert_eq!(shift_left(&vec![0_u32, 0], usize::MAX).value, Vec::<u32>::new());

    assert_eq!(shift_right(&vec![0x00_u8, 0x00, 0x01], 9), vec![0x80]);
    assert_eq!(shift_right(&[0x34_u8, 0x12], 4), [0x23, 0x01]);
    assert_eq!(shift_right(&[0x34_u8, 0x12], 16), [0x00, 0x00]);
}

#[test]
fn test_div1() {
    let step = div1(&[0x10_u8, 0x00], &[0x03, 0x00]);
    assert_eq!(step.quotient, 5);
    assert_eq!(step.product, [0x0f, 0x00]);

    let step = div1(&[0x02_u8, 0x00], &[0x03, 0x00]);
    assert_eq!(step.quotient, 0);
    assert_eq!(step.product, [0x00, 0x00], "lhs < rhs should give a zero product.");

    let step = div1(&vec![0x34_u8, 0x12], &vec![0x34, 0x12]);
    assert_eq!(step.quotient, 1);
    assert_eq!(step.product, vec![0x34, 0x12]);

    let step = div1(&vec![0xff_u8, 0xfe], &vec![0xff]);
    assert_eq!(step.quotient, 0xff, "The largest limb should be reachable.");
    assert_eq!(step.product, vec![0x01, 0xfe]);
}

#[test]
fn test_div_mod_small_limbs() {
    let result = div_mod(&[0x10_u8, 0x00], &[0x03, 0x00]);
    assert_eq!(result.quotient, [0x05, 0x00]);
    assert_eq!(result.remainder, [0x01, 0x00]);

    let result = div_mod(&[0x02_u8, 0x00], &[0x03, 0x00]);
    assert_eq!(result.quotient, [0x00, 0x00]);
    assert_eq!(result.remainder, [0x02, 0x00], "A smaller dividend is the remainder.");

    let result = div_mod(&[0xff_u8, 0xff], &[0xff, 0xff]);
    assert_eq!(result.quotient, [0x01, 0x00]);
    assert_eq!(result.remainder, [0x00, 0x00]);
}

#[test]
fn test_div_by_zero() {
    assert_eq!(try_div_mod(&[0x10_u8, 0x00], &[0x00, 0x00]), Err(DivideByZeroError));
    assert_panics!({
        div_mod(&vec![1_u32], &vec![0]);
    });
    assert_panics!({
        div_mod_limb(&vec![1_u32], 0);
    });
}

#[test]
fn test_div_mod_limb() {
    let (quotient, remainder) = div_mod_limb(&vec![0x00_u8, 0x00, 0x01], 10);
    assert_eq!(to_u128(&quotient), Some(0x10000 / 10));
    assert_eq!(remainder, 6);

    let (quotient, remainder) = div_mod_limb(&[7_u64, 0], 7);
    assert_eq!(quotient, [1, 0]);
    assert_eq!(remainder, 0);
}

#[test]
fn test_u128_conversions() {
    let converted = from_u128::<[u8; 2]>(0x1_2345);
    assert_eq!(converted.value, [0x45, 0x23]);
    assert!(converted.overflow);

    let converted = from_u128::<Vec<u32>>(u128::MAX);
    assert_eq!(converted.value, vec![u32::MAX; 4]);
    assert!(!converted.overflow);
    assert_eq!(from_u128::<Vec<u64>>(0).value, Vec::<u64>::new());

    assert_eq!(to_u128(&[0x00_u8, 0x00]), Some(0));
    assert_eq!(to_u128(&vec![0_u64, 0, 1]), None);
    assert_eq!(to_u128(&vec![u64::MAX, u64::MAX, 0]), Some(u128::MAX));
    assert!(is_zero(&[0_u16; 3]));
    assert!(!is_zero(&vec![0_u16, 1]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn fixed_arithmetic_matches_u64(a in any::<u64>(), b in any::<u64>()) {
        let (lhs, rhs) = (quad(a), quad(b));

        let sum = add(&lhs, &rhs);
        prop_assert_eq!(from_quad(sum.value), a.wrapping_add(b));
        prop_assert_eq!(sum.overflow, a.checked_add(b).is_none());

        let difference = sub(&lhs, &rhs);
        prop_assert_eq!(from_quad(difference.value), a.wrapping_sub(b));
        prop_assert_eq!(difference.overflow, a < b);

        let product = multiply(&lhs, &rhs);
        prop_assert_eq!(from_quad(product.value), a.wrapping_mul(b));
        prop_assert_eq!(product.overflow, a.checked_mul(b).is_none());

        prop_assert_eq!(compare(&lhs, &rhs), a.cmp(&b));
    }

    #[test]
    fn shifts_match_u64(a in any::<u64>(), bits in 0_usize..80) {
        let shifted = shift_left(&quad(a), bits);
        let exact = u128::from(a).checked_shl(bits as u32).unwrap_or(0);
        let lost = (bits >= 64 && a != 0) || exact > u128::from(u64::MAX);
        prop_assert_eq!(from_quad(shifted.value), a.checked_shl(bits as u32).unwrap_or(0));
        prop_assert_eq!(shifted.overflow, lost);

        let shifted = shift_right(&quad(a), bits);
        prop_assert_eq!(from_quad(shifted), a.checked_shr(bits as u32).unwrap_or(0));
    }

    #[test]
    fn div1_finds_quotient_limb(rhs in 1_u16.., high in any::<u8>(), low in any::<u8>()) {
        // Any lhs below rhs * 2^8.
        let lhs = (u32::from(rhs) * u32::from(high) + u32::from(low)) % (u32::from(rhs) << 8);
        let lhs_limbs = [lhs as u8, (lhs >> 8) as u8, (lhs >> 16) as u8];
        let rhs_limbs = [rhs as u8, (rhs >> 8) as u8, 0];

        let step = div1(&lhs_limbs, &rhs_limbs);
        prop_assert_eq!(u32::from(step.quotient), lhs / u32::from(rhs));
        prop_assert_eq!(to_u128(&step.product), Some(u128::from(lhs - lhs % u32::from(rhs))));
    }

    #[test]
    fn div_mod_matches_u64(a in any::<u64>(), b in 1_u64..) {
        let result = div_mod(&a.to_le_bytes(), &b.to_le_bytes());
        prop_assert_eq!(u64::from_le_bytes(result.quotient), a / b);
        prop_assert_eq!(u64::from_le_bytes(result.remainder), a % b);

        let result = div_mod(&quad(a), &quad(b));
        prop_assert_eq!(from_quad(result.quotient), a / b);
        prop_assert_eq!(from_quad(result.remainder), a % b);
    }

    #[test]
    fn div_mod_reconstructs_dividend(
        a in proptest::collection::vec(any::<u16>(), 0..12),
        b in proptest::collection::vec(any::<u16>(), 1..6),
    ) {
        prop_assume!(!is_zero(&b));
        let result = div_mod(&a, &b);
        prop_assert_eq!(compare(&result.remainder, &b), Ordering::Less);

        let product = multiply(&result.quotient, &b).value;
        let rebuilt = add(&product, &result.remainder).value;
        prop_assert_eq!(compare(&rebuilt, &a), Ordering::Equal);
    }
}
