use log::debug;

/// Swaps the median of `v[a]`, `v[b]` and `v[c]` into `v[result]`.
///
/// `result` may coincide with one of the candidates.
pub fn move_median_to_first<T, F>(
    v: &mut [T],
    result: usize,
    a: usize,
    b: usize,
    c: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let median = if is_less(&v[a], &v[b]) {
        if is_less(&v[b], &v[c]) {
            b
        } else if is_less(&v[a], &v[c]) {
            c
        } else {
            a
        }
    } else if is_less(&v[a], &v[c]) {
        a
    } else if is_less(&v[b], &v[c]) {
        c
    } else {
        b
    };
    v.swap(result, median);
}

/// Partitions `v[1..]` around the pivot `v[0]` without bounds checks in the inner scans, returning
/// the cut: `v[1..cut]` holds elements not greater than the pivot, `v[cut..]` elements not less
/// than it. The pivot itself stays at index 0.
///
/// Both scans rely on sentinels: `v[1..]` must contain an element not less than the pivot and an
/// element not greater than it. [`unguarded_partition_pivot`] establishes this with its
/// median-of-three.
///
/// # Panics
/// Panics if the sentinel precondition doesn't hold, as a scan then runs off the slice.
pub fn unguarded_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = 1;
    let mut last = v.len();
    loop {
        while is_less(&v[first], &v[0]) {
            first += 1;
        }
        last -= 1;
        while is_less(&v[0], &v[last]) {
            last -= 1;
        }
        if first >= last {
            return first;
        }
        v.swap(first, last);
        first += 1;
    }
}

/// Chooses a pivot as the median of the second, middle and last elements, moves it to the front
/// and partitions the rest around it with [`unguarded_partition`].
///
/// The returned cut lies in `1..v.len()`, so both `v[..cut]` and `v[cut..]` are strictly shorter
/// than `v`. Every element of `v[..cut]` is not greater than every element of `v[cut..]`.
///
/// # Panics
/// Panics if `v.len() <= 3`.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::partition::unguarded_partition_pivot;
/// let mut v = [7, 2, 9, 4, 1, 8, 3];
/// let cut = unguarded_partition_pivot(&mut v, &mut |a: &i32, b: &i32| a < b);
/// let (left, right) = v.split_at(cut);
/// assert!(left.iter().all(|l| right.iter().all(|r| l <= r)));
/// ```
pub fn unguarded_partition_pivot<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len > 3, "unguarded partition needs more than 3 elements, got {len}");

    move_median_to_first(v, 0, 1, len / 2, len - 1, is_less);
    unguarded_partition(v, is_less)
}

/// Reorders the slice so that all elements satisfying `pred` precede those that don't, returning
/// the number of elements that satisfy it. Relative order is not preserved.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::partition_by;
/// let mut v = [1, 2, 3, 4, 5, 6];
/// let split = partition_by(&mut v, |x| x % 2 == 0);
/// assert_eq!(split, 3);
/// assert!(v[..split].iter().all(|x| x % 2 == 0));
/// ```
pub fn partition_by<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let Some(mut split) = v.iter().position(|x| !pred(x)) else {
        return v.len();
    };

    for i in split + 1..v.len() {
        if pred(&v[i]) {
            v.swap(split, i);
            split += 1;
        }
    }
    split
}

/// Returns true if every element satisfying `pred` precedes every element that doesn't.
pub fn is_partitioned_by<T, P>(v: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let split = v.iter().position(|x| !pred(x)).unwrap_or(v.len());
    !v[split..].iter().any(pred)
}

/// Returns the index of the first element of a partitioned slice that doesn't satisfy `pred`.
///
/// # Time Complexity
/// `O(log n)` predicate calls.
pub fn partition_point_by<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(&v[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Reorders the slice so that all elements satisfying `pred` precede those that don't, preserving
/// the relative order within both groups. Returns the number of elements satisfying `pred`.
///
/// The predicate is called exactly once per element.
///
/// # Time Complexity
/// `O(n)` if a temporary buffer of `n` indices can be reserved, otherwise `O(n log n)` swaps
/// using rotations and no allocation.
///
/// # Examples
/// ```
/// # use standard_polyfill::algorithm::stable_partition_by;
/// let mut v = [1, 2, 3, 4, 5, 6, 7];
/// let split = stable_partition_by(&mut v, |x| x % 3 == 0);
/// assert_eq!(split, 2);
/// assert_eq!(v, [3, 6, 1, 2, 4, 5, 7]);
/// ```
pub fn stable_partition_by<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // Leading elements that already satisfy the predicate stay where they are.
    let Some(start) = v.iter().position(|x| !pred(x)) else {
        return v.len();
    };

    let rest = &mut v[start + 1..];
    let mut order = Vec::new();
    let split = if order.try_reserve_exact(rest.len()).is_ok() {
        stable_partition_buffered(rest, &mut order, &mut pred)
    } else {
        debug!("no buffer for {} indices, partitioning by rotation", rest.len());
        stable_partition_rotating(rest, &mut pred)
    };

    // v[start] is known to fail the predicate, so it moves behind the satisfied part of rest.
    v[start..=start + split].rotate_left(1);
    start + split
}

/// Stable partition through a permutation of indices: satisfying elements are recorded from the
/// front of `order`, the others from the back, which is then reversed to restore their order.
pub(crate) fn stable_partition_buffered<T, P>(
    v: &mut [T],
    order: &mut Vec<usize>,
    pred: &mut P,
) -> usize
where
    P: FnMut(&T) -> bool,
{
    let len = v.len();
    order.clear();
    order.resize(len, 0);

    let (mut front, mut back) = (0, len);
    for (i, item) in v.iter().enumerate() {
        if pred(item) {
            order[front] = i;
            front += 1;
        } else {
            back -= 1;
            order[back] = i;
        }
    }
    order[front..].reverse();

    apply_permutation(v, order);
    front
}

/// Stable partition by divide and conquer: both halves are partitioned, then the failing part of
/// the left half is rotated past the satisfying part of the right half.
pub(crate) fn stable_partition_rotating<T, P>(v: &mut [T], pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    match v.len() {
        0 => 0,
        1 => usize::from(pred(&v[0])),
        len => {
            let mid = len / 2;
            let left = stable_partition_rotating(&mut v[..mid], pred);
            let right = stable_partition_rotating(&mut v[mid..], pred);
            v[left..mid + right].rotate_left(mid - left);
            left + right
        }
    }
}

/// Rearranges `v` so that position `i` receives the element previously at `order[i]`.
///
/// `order` must be a permutation of `0..v.len()`; it is consumed as scratch space and left as the
/// identity. Each cycle is resolved with swaps, so the whole permutation takes fewer than `n`
/// swaps.
pub(crate) fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        let mut current = start;
        while order[current] != current {
            let source = order[current];
            order[current] = current;
            if source == start {
                break;
            }
            v.swap(current, source);
            current = source;
        }
    }
}
