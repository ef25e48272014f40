use std::mem;

use log::trace;

use crate::algorithm::depth_limit;
use crate::algorithm::heap::{sift_down, sort_heap_with};
use crate::algorithm::partition::unguarded_partition_pivot;
use crate::algorithm::select::heap_select_with;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// Ranges of this many elements or fewer are left for the final insertion sort of introsort.
const INTROSORT_THRESHOLD: usize = 16;

/// Sorts the slice with an insertion sort. Stable, `O(n^2)`, intended for short ranges.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::sort::insertion_sort_by;
/// let mut v = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// insertion_sort_by(&mut v, |a, b| a.0 < b.0);
/// assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn insertion_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort_with(v, &mut is_less);
}

pub(crate) fn insertion_sort_with<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sorts the slice with an introsort. Not stable.
///
/// Quicksort partitions with a median-of-three pivot are limited to a depth of
/// `2 * floor(log2(n))`; ranges that exceed it are heap sorted instead. Ranges of 16 elements or
/// fewer are left alone until a final insertion sort over the whole slice.
///
/// # Time Complexity
/// `O(n log n)` in the worst case. No memory is allocated.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::sort_by;
/// let mut v = [5, -3, 9, 0, 2, 2, -8];
/// sort_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [-8, -3, 0, 2, 2, 5, 9]);
/// ```
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    introsort_loop(v, depth_limit(len), &mut is_less);
    insertion_sort_with(v, &mut is_less);
}

/// [`sort_by`] using [`Ord`].
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::lt)
}

/// Leaves every range of at most [`INTROSORT_THRESHOLD`] elements unsorted, but in its final
/// position relative to the other ranges.
fn introsort_loop<T, F>(mut v: &mut [T], mut depth_limit: u32, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > INTROSORT_THRESHOLD {
        if depth_limit == 0 {
            let len = v.len();
            trace!("introsort depth limit reached, heap sorting {len} elements");
            heap_select_with(v, len, is_less);
            sort_heap_with(v, is_less);
            return;
        }
        depth_limit -= 1;

        let cut = unguarded_partition_pivot(v, is_less);
        let (left, right) = mem::take(&mut v).split_at_mut(cut);
        introsort_loop(right, depth_limit, is_less);
        v = left;
    }
}

/// Rearranges the slice so that `v[..middle]` holds the `middle` smallest elements in sorted order.
/// The order of `v[middle..]` is unspecified.
///
/// # Time Complexity
/// `O(n log middle)`.
///
/// # Panics
/// Panics if `middle > v.len()`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::partial_sort_by;
/// let mut v = [9, 1, 8, 2, 7, 3, 6];
/// partial_sort_by(&mut v, 3, |a, b| a < b);
/// assert_eq!(v[..3], [1, 2, 3]);
/// ```
pub fn partial_sort_by<T, F>(v: &mut [T], middle: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    IndexOutOfBounds::check_inclusive(middle, v.len()).throw();
    heap_select_with(v, middle, &mut is_less);
    sort_heap_with(&mut v[..middle], &mut is_less);
}

/// [`partial_sort_by`] using [`Ord`].
///
/// # Panics
/// Panics if `middle > v.len()`.
pub fn partial_sort<T: Ord>(v: &mut [T], middle: usize) {
    partial_sort_by(v, middle, T::lt)
}

/// Copies the smallest `min(src.len(), dst.len())` elements of `src` into the front of `dst` in
/// sorted order, returning how many were copied. `src` is not modified.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::sort::partial_sort_copy_by;
/// let src = [6, 2, 9, 4, 1];
/// let mut dst = [0; 3];
/// assert_eq!(partial_sort_copy_by(&src, &mut dst, |a, b| a < b), 3);
/// assert_eq!(dst, [1, 2, 4]);
/// ```
pub fn partial_sort_copy_by<T, F>(src: &[T], dst: &mut [T], mut is_less: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = src.len().min(dst.len());
    if len == 0 {
        return 0;
    }

    dst[..len].clone_from_slice(&src[..len]);
    let heap = &mut dst[..len];
    for root in (0..len / 2).rev() {
        sift_down(heap, root, len, &mut is_less);
    }

    for item in &src[len..] {
        if is_less(item, &heap[0]) {
            heap[0].clone_from(item);
            sift_down(heap, 0, len, &mut is_less);
        }
    }

    sort_heap_with(heap, &mut is_less);
    len
}

/// Returns the length of the longest sorted prefix of the slice.
pub fn is_sorted_until_by<T, F>(v: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len())
        .find(|&i| is_less(&v[i], &v[i - 1]))
        .unwrap_or(v.len())
}

/// Returns true if no element of the slice is less than the one before it.
pub fn is_sorted_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_sorted_until_by(v, is_less) == v.len()
}
