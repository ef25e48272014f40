#![cfg(test)]

use proptest::prelude::*;

use super::partition::{stable_partition_buffered, stable_partition_rotating};
use super::*;
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_move_median_to_first() {
    let is_less = &mut |a: &i32, b: &i32| a < b;
    for (a, b, c) in [(1, 2, 3), (1, 3, 2), (2, 1, 3), (2, 3, 1), (3, 1, 2), (3, 2, 1)] {
        let mut v = [0, a, b, c];
        move_median_to_first(&mut v, 0, 1, 2, 3, is_less);
        assert_eq!(v[0], 2, "The median of {a}, {b}, {c} should be moved to the front.");
    }

    let mut v = [5, 5, 5];
    move_median_to_first(&mut v, 0, 0, 1, 2, is_less);
    assert_eq!(v, [5, 5, 5], "Equal candidates should be handled.");
}

#[test]
fn test_unguarded_partition_pivot() {
    let inputs: [&[i32]; 4] = [
        &[4, 4, 4, 4, 4, 4],
        &[1, 2, 3, 4, 5, 6, 7, 8],
        &[8, 7, 6, 5, 4, 3, 2, 1],
        &[3, 9, 0, 3, 7, 3, 1, 3, 2],
    ];

    for input in inputs {
        let mut v = input.to_vec();
        let cut = unguarded_partition_pivot(&mut v, &mut |a: &i32, b: &i32| a < b);
        assert!(
            (1..v.len()).contains(&cut),
            "The cut {cut} should split {input:?} into two non-empty parts."
        );
        let (left, right) = v.split_at(cut);
        assert!(
            left.iter().all(|l| right.iter().all(|r| l <= r)),
            "Partition of {input:?} at {cut} is invalid: {v:?}"
        );
    }

    assert_panics!({
        unguarded_partition_pivot(&mut [1, 2, 3], &mut |a: &i32, b: &i32| a < b);
    });
}

#[test]
fn test_partition() {
    let mut v: Vec<i32> = (0..20).collect();
    let split = partition_by(&mut v, |x| x % 3 == 0);
    assert_eq!(split, 7);
    assert!(is_partitioned_by(&v, |x| x % 3 == 0));
    assert_eq!(partition_point_by(&v, |x| x % 3 == 0), split);

    let mut all = [2, 4, 6];
    assert_eq!(partition_by(&mut all, |x| x % 2 == 0), 3);
    let mut none = [1, 3, 5];
    assert_eq!(partition_by(&mut none, |x| x % 2 == 0), 0);
    assert!(!is_partitioned_by(&[1, 2, 4], |x| x % 2 == 0));
}

#[test]
fn test_stable_partition_paths() {
    let input: Vec<(i32, usize)> = [3, 8, 1, 8, 6, 3, 0, 7, 2, 2, 9]
        .into_iter()
        .enumerate()
        .map(|(id, key)| (key, id))
        .collect();
    let mut expected = input.clone();
    expected.sort_by_key(|&(key, _)| key % 2 != 0);

    let mut buffered = input.clone();
    let split = stable_partition_buffered(&mut buffered, &mut Vec::new(), &mut |x| x.0 % 2 == 0);
    assert_eq!(split, 6);
    assert_eq!(buffered, expected, "The buffered path should keep the relative order.");

    let mut rotating = input.clone();
    let split = stable_partition_rotating(&mut rotating, &mut |x| x.0 % 2 == 0);
    assert_eq!(split, 6);
    assert_eq!(rotating, expected, "The rotating path should keep the relative order.");

    let mut public = input;
    assert_eq!(stable_partition_by(&mut public, |x| x.0 % 2 == 0), 6);
    assert_eq!(public, expected);
}

#[test]
fn test_stable_partition_calls_predicate_once() {
    let mut v: Vec<i32> = (0..50).collect();
    let mut calls = 0;
    stable_partition_by(&mut v, |x| {
        calls += 1;
        x % 4 == 1
    });
    assert_eq!(calls, 50, "Every element should be tested exactly once.");
}

#[test]
fn test_stable_partition_panic_keeps_elements() {
    let counter = DropCounter::new();
    let mut v: Vec<_> = (0..10).map(|i| counter.track(i)).collect();
    let mut calls = 0;

    assert_panics!({
        stable_partition_by(&mut v, |x| {
            calls += 1;
            if calls == 6 {
                panic!("predicate failure");
            }
            x.key % 2 == 0
        });
    });

    let mut keys: Vec<i32> = v.iter().map(|x| x.key).collect();
    keys.sort();
    assert_eq!(keys, (0..10).collect::<Vec<i32>>(), "No element should be lost or duplicated.");
    assert_eq!(counter.drops(), 0, "Nothing should have been dropped.");
}

#[test]
fn test_apply_permutation() {
    let mut v = ['a', 'b', 'c', 'd', 'e'];
    let mut order = [3, 0, 4, 1, 2];
    apply_permutation(&mut v, &mut order);
    assert_eq!(v, ['d', 'a', 'e', 'b', 'c']);
    assert_eq!(order, [0, 1, 2, 3, 4], "The order buffer should be left as the identity.");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn stable_partition_matches_stable_sort_by_class(
        v in proptest::collection::vec(0_u8..10, 0..80),
    ) {
        let tagged: Vec<(u8, usize)> = v.iter().copied().zip(0..).collect();
        let mut expected = tagged.clone();
        expected.sort_by_key(|&(key, _)| key >= 4);

        let mut buffered = tagged.clone();
        let split = stable_partition_buffered(&mut buffered, &mut Vec::new(), &mut |x| x.0 < 4);
        prop_assert_eq!(&buffered, &expected);

        let mut rotating = tagged;
        let rotated_split = stable_partition_rotating(&mut rotating, &mut |x| x.0 < 4);
        prop_assert_eq!(&rotating, &expected);
        prop_assert_eq!(split, rotated_split);
    }
}
