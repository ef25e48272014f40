/// Restores the heap property for the subtree rooted at `root`, considering only `v[..len]`.
pub(crate) fn sift_down<T, F>(v: &mut [T], mut root: usize, len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            break;
        }

        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[root], &v[child]) {
            break;
        }

        v.swap(root, child);
        root = child;
    }
}

/// Moves the element at `hole` towards the root until its parent is not less than it.
fn sift_up<T, F>(v: &mut [T], mut hole: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while hole > 0 {
        let parent = (hole - 1) / 2;
        if !is_less(&v[parent], &v[hole]) {
            break;
        }
        v.swap(parent, hole);
        hole = parent;
    }
}

/// Rearranges the slice into a max-heap with respect to `is_less`.
///
/// # Time Complexity
/// `O(n)`, with at most `2n` comparisons.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::heap::{is_heap, make_heap_by};
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap_by(&mut v, |a, b| a < b);
/// assert_eq!(v[0], 9);
/// assert!(is_heap(&v));
/// ```
pub fn make_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    for root in (0..len / 2).rev() {
        sift_down(v, root, len, &mut is_less);
    }
}

/// Rearranges the slice into a max-heap using [`Ord`].
pub fn make_heap<T: Ord>(v: &mut [T]) {
    make_heap_by(v, T::lt)
}

/// Given that `v[..len - 1]` is a heap, moves the last element into place so that the whole slice
/// is a heap.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::heap::{is_heap, make_heap, push_heap};
/// let mut v = vec![5, 3, 4];
/// make_heap(&mut v);
/// v.push(8);
/// push_heap(&mut v);
/// assert_eq!(v[0], 8);
/// assert!(is_heap(&v));
/// ```
pub fn push_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some(last) = v.len().checked_sub(1) {
        sift_up(v, last, &mut is_less);
    }
}

/// [`push_heap_by`] using [`Ord`].
pub fn push_heap<T: Ord>(v: &mut [T]) {
    push_heap_by(v, T::lt)
}

/// Swaps the greatest element of the heap `v` to the end of the slice and restores the heap
/// property for `v[..len - 1]`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::heap::{make_heap, pop_heap};
/// let mut v = vec![1, 7, 3, 5];
/// make_heap(&mut v);
/// pop_heap(&mut v);
/// assert_eq!(v.pop(), Some(7));
/// assert_eq!(v[0], 5);
/// ```
pub fn pop_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len > 1 {
        v.swap(0, len - 1);
        sift_down(v, 0, len - 1, &mut is_less);
    }
}

/// [`pop_heap_by`] using [`Ord`].
pub fn pop_heap<T: Ord>(v: &mut [T]) {
    pop_heap_by(v, T::lt)
}

/// Turns a heap into a slice sorted in ascending order. Not stable.
///
/// # Time Complexity
/// `O(n log n)`.
pub fn sort_heap_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_heap_with(v, &mut is_less);
}

/// [`sort_heap_by`] using [`Ord`].
pub fn sort_heap<T: Ord>(v: &mut [T]) {
    sort_heap_by(v, T::lt)
}

pub(crate) fn sort_heap_with<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, is_less);
    }
}

/// Returns the length of the longest prefix of `v` that is a heap.
pub fn is_heap_until_by<T, F>(v: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len())
        .find(|&child| is_less(&v[(child - 1) / 2], &v[child]))
        .unwrap_or(v.len())
}

/// Returns true if the whole of `v` is a max-heap with respect to `is_less`.
pub fn is_heap_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until_by(v, is_less) == v.len()
}

/// [`is_heap_by`] using [`Ord`].
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, T::lt)
}
