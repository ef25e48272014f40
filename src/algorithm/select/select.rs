use log::trace;

use crate::algorithm::depth_limit;
use crate::algorithm::heap::sift_down;
use crate::algorithm::partition::unguarded_partition_pivot;
use crate::algorithm::sort::insertion_sort_with;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// Ranges of this many elements or fewer are finished with an insertion sort.
const SMALL_RANGE: usize = 3;

/// Rearranges the slice so that `v[nth]` is the element that would be there if the whole slice
/// were sorted with `is_less`, every element before it is not greater and every element after it
/// is not less. The order within the two sides is unspecified.
///
/// `nth == v.len()` is allowed and does nothing, like passing `last` as the nth iterator.
///
/// The selection is an introselect: quickselect steps with a median-of-three pivot, limited to
/// `2 * floor(log2(n))` partitions, after which the remaining range is finished by
/// [`heap_select_by`]. A pathological input can therefore only make it degrade to `O(n log n)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the slice.
///
/// | Case | Complexity |
/// |-|-|
/// | average | `O(n)` |
/// | worst | `O(n log n)` |
///
/// No memory is allocated.
///
/// # Panics
/// Panics if `nth > v.len()`. If `is_less` panics, the panic propagates and the slice is left as
/// some permutation of its original elements.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::nth_element_by;
/// let mut v = [5, 3, 1, 4, 2];
/// nth_element_by(&mut v, 2, |a, b| a < b);
/// assert_eq!(v[2], 3);
/// assert!(v[..2].iter().all(|&x| x < 3));
/// assert!(v[3..].iter().all(|&x| x > 3));
/// ```
pub fn nth_element_by<T, F>(v: &mut [T], nth: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    IndexOutOfBounds::check_inclusive(nth, len).throw();
    if nth == len {
        return;
    }

    introselect(v, nth, depth_limit(len), &mut is_less);
}

/// [`nth_element_by`] using [`Ord`].
///
/// # Panics
/// Panics if `nth > v.len()`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::nth_element;
/// let mut v: Vec<u32> = (0..100).rev().collect();
/// nth_element(&mut v, 10);
/// assert_eq!(v[10], 10);
/// ```
pub fn nth_element<T: Ord>(v: &mut [T], nth: usize) {
    nth_element_by(v, nth, T::lt)
}

/// [`nth_element_by`] comparing the keys extracted by `key`.
///
/// # Panics
/// Panics if `nth > v.len()`.
pub fn nth_element_by_key<T, K, F>(v: &mut [T], nth: usize, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    nth_element_by(v, nth, |a, b| key(a) < key(b))
}

/// Moves the `middle` smallest elements of the slice into `v[..middle]`, arranged as a max-heap
/// so that the greatest of them is at index 0. The rest of the slice is left in unspecified order.
///
/// # Time Complexity
/// `O(n log middle)`.
///
/// # Panics
/// Panics if `middle > v.len()`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::heap_select_by;
/// let mut v = [9, 4, 7, 1, 8, 2];
/// heap_select_by(&mut v, 3, |a, b| a < b);
/// assert_eq!(v[0], 4);
/// let mut smallest = v[..3].to_vec();
/// smallest.sort();
/// assert_eq!(smallest, [1, 2, 4]);
/// ```
pub fn heap_select_by<T, F>(v: &mut [T], middle: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    IndexOutOfBounds::check_inclusive(middle, v.len()).throw();
    heap_select_with(v, middle, &mut is_less);
}

pub(crate) fn heap_select_with<T, F>(v: &mut [T], middle: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if middle == 0 {
        return;
    }

    for root in (0..middle / 2).rev() {
        sift_down(v, root, middle, is_less);
    }

    for i in middle..v.len() {
        if is_less(&v[i], &v[0]) {
            v.swap(0, i);
            sift_down(v, 0, middle, is_less);
        }
    }
}

/// The selection loop behind [`nth_element_by`], iterating over a shrinking `[lo, hi)` that always
/// contains `nth`. Requires `nth < v.len()`.
pub(crate) fn introselect<T, F>(v: &mut [T], nth: usize, mut depth_limit: u32, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());

    while hi - lo > SMALL_RANGE {
        if depth_limit == 0 {
            trace!("introselect depth limit reached, heap selecting over {} elements", hi - lo);
            let range = &mut v[lo..hi];
            let target = nth - lo;
            heap_select_with(range, target + 1, is_less);
            // The root is the greatest of the target + 1 smallest elements.
            range.swap(0, target);
            return;
        }
        depth_limit -= 1;

        let cut = lo + unguarded_partition_pivot(&mut v[lo..hi], is_less);
        if cut <= nth {
            lo = cut;
        } else {
            hi = cut;
        }
    }

    insertion_sort_with(&mut v[lo..hi], is_less);
}
