use log::debug;

use super::sort::insertion_sort_with;
use crate::algorithm::partition::apply_permutation;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// Length of the runs that the buffered merge sort insertion sorts before merging.
const RUN_LEN: usize = 7;

/// Below this length the unbuffered merge sort falls back to insertion sort.
const UNBUFFERED_INSERTION_LEN: usize = 15;

/// Merges the sorted slices `a` and `b` into `out`, returning the number of elements written
/// (`a.len() + b.len()`). The merge is stable: of two equivalent elements, the one from `a` comes
/// first.
///
/// # Panics
/// Panics if `out` is shorter than `a.len() + b.len()`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::merge_by;
/// let mut out = [0; 7];
/// let written = merge_by(&[1, 4, 6], &[2, 3, 5, 7], &mut out, |a, b| a < b);
/// assert_eq!(written, 7);
/// assert_eq!(out, [1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn merge_by<T, F>(a: &[T], b: &[T], out: &mut [T], mut is_less: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = a.len() + b.len();
    IndexOutOfBounds::check_inclusive(len, out.len()).throw();

    let (mut i, mut j) = (0, 0);
    for slot in &mut out[..len] {
        if j < b.len() && (i == a.len() || is_less(&b[j], &a[i])) {
            slot.clone_from(&b[j]);
            j += 1;
        } else {
            slot.clone_from(&a[i]);
            i += 1;
        }
    }
    len
}

/// [`merge_by`] using [`Ord`].
///
/// # Panics
/// Panics if `out` is shorter than `a.len() + b.len()`.
pub fn merge<T: Ord + Clone>(a: &[T], b: &[T], out: &mut [T]) -> usize {
    merge_by(a, b, out, T::lt)
}

/// Merges the consecutive sorted ranges `v[..mid]` and `v[mid..]` in place, so that the whole
/// slice is sorted. Stable.
///
/// # Time Complexity
/// `O(n)` if a temporary buffer of `n` indices can be reserved, otherwise `O(n log n)` using
/// rotations and no allocation.
///
/// # Panics
/// Panics if `mid > v.len()`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::inplace_merge_by;
/// let mut v = [(1, 'a'), (3, 'b'), (5, 'c'), (1, 'd'), (3, 'e')];
/// inplace_merge_by(&mut v, 3, |a, b| a.0 < b.0);
/// assert_eq!(v, [(1, 'a'), (1, 'd'), (3, 'b'), (3, 'e'), (5, 'c')]);
/// ```
pub fn inplace_merge_by<T, F>(v: &mut [T], mid: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    IndexOutOfBounds::check_inclusive(mid, len).throw();
    if mid == 0 || mid == len || !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    let mut order = Vec::new();
    if order.try_reserve_exact(len).is_ok() {
        merge_with_buffer(v, mid, &mut order, &mut is_less);
    } else {
        debug!("no buffer for {len} indices, merging by rotation");
        merge_without_buffer(v, mid, &mut is_less);
    }
}

/// [`inplace_merge_by`] using [`Ord`].
///
/// # Panics
/// Panics if `mid > v.len()`.
pub fn inplace_merge<T: Ord>(v: &mut [T], mid: usize) {
    inplace_merge_by(v, mid, T::lt)
}

/// Sorts the slice, preserving the order of equivalent elements.
///
/// # Time Complexity
/// `O(n log n)` if a temporary buffer of `n` indices can be reserved, otherwise `O(n log^2 n)`
/// without allocation.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::stable_sort_by;
/// let mut v = ["bb", "a", "ccc", "dd", "e"];
/// stable_sort_by(&mut v, |a, b| a.len() < b.len());
/// assert_eq!(v, ["a", "e", "bb", "dd", "ccc"]);
/// ```
pub fn stable_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut order = Vec::new();
    if order.try_reserve_exact(len).is_ok() {
        merge_sort_buffered(v, &mut order, &mut is_less);
    } else {
        debug!("no buffer for {len} indices, sorting without buffer");
        inplace_stable_sort(v, &mut is_less);
    }
}

/// [`stable_sort_by`] using [`Ord`].
pub fn stable_sort<T: Ord>(v: &mut [T]) {
    stable_sort_by(v, T::lt)
}

/// Bottom-up merge sort: runs of [`RUN_LEN`] are insertion sorted, then adjacent runs of doubling
/// width are merged through `order`.
pub(crate) fn merge_sort_buffered<T, F>(v: &mut [T], order: &mut Vec<usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    for run in v.chunks_mut(RUN_LEN) {
        insertion_sort_with(run, is_less);
    }

    let mut width = RUN_LEN;
    while width < len {
        let mut lo = 0;
        while lo + width < len {
            let hi = (lo + 2 * width).min(len);
            let pair = &mut v[lo..hi];
            if is_less(&pair[width], &pair[width - 1]) {
                merge_with_buffer(pair, width, order, is_less);
            }
            lo = hi;
        }
        width *= 2;
    }
}

/// Top-down merge sort merging without a buffer.
pub(crate) fn inplace_stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < UNBUFFERED_INSERTION_LEN {
        insertion_sort_with(v, is_less);
        return;
    }

    let mid = v.len() / 2;
    inplace_stable_sort(&mut v[..mid], is_less);
    inplace_stable_sort(&mut v[mid..], is_less);
    merge_without_buffer(v, mid, is_less);
}

/// Merges `v[..mid]` and `v[mid..]` by recording the merged order of indices in `order` and then
/// applying it as a permutation.
pub(crate) fn merge_with_buffer<T, F>(
    v: &mut [T],
    mid: usize,
    order: &mut Vec<usize>,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    order.clear();

    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        if is_less(&v[j], &v[i]) {
            order.push(j);
            j += 1;
        } else {
            order.push(i);
            i += 1;
        }
    }
    order.extend(i..mid);
    order.extend(j..len);

    apply_permutation(v, order);
}

/// Merges `v[..mid]` and `v[mid..]` without extra memory.
///
/// The longer range is cut in half and the matching cut in the other range is found by binary
/// search, so that rotating the middle section leaves two independent, smaller merges.
pub(crate) fn merge_without_buffer<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (left_len, right_len) = (mid, v.len() - mid);
    if left_len == 0 || right_len == 0 {
        return;
    }
    if left_len + right_len == 2 {
        if is_less(&v[1], &v[0]) {
            v.swap(0, 1);
        }
        return;
    }

    let (first_cut, second_cut) = if left_len > right_len {
        let first_cut = left_len / 2;
        (first_cut, mid + lower_bound(&v[mid..], &v[first_cut], is_less))
    } else {
        let second_cut = mid + right_len / 2;
        (upper_bound(&v[..mid], &v[second_cut], is_less), second_cut)
    };

    v[first_cut..second_cut].rotate_left(mid - first_cut);
    let new_mid = first_cut + (second_cut - mid);

    let (left, right) = v.split_at_mut(new_mid);
    merge_without_buffer(left, first_cut, is_less);
    merge_without_buffer(right, mid - first_cut, is_less);
}

/// Index of the first element of the sorted `v` that is not less than `value`.
fn lower_bound<T, F>(v: &[T], value: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(&v[mid], value) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Index of the first element of the sorted `v` that is greater than `value`.
fn upper_bound<T, F>(v: &[T], value: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(value, &v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
