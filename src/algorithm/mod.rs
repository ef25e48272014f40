//! Generic sequence algorithms operating in place on slices.
//!
//! # Purpose
//! These are the parts of `<algorithm>` that actually need some thought: selection, heaps,
//! partitioning, sorting and merging. Everything here permutes the caller's slice and never
//! takes ownership of it.
//!
//! # Method
//! Every algorithm takes a strict weak ordering in the form of an "is less" predicate,
//! `FnMut(&T, &T) -> bool`, rather than a [`Ordering`](std::cmp::Ordering) returning comparator.
//! The plain variants (without `_by`) use [`Ord`] through `<`.
//!
//! Elements are only ever moved with [`slice::swap`] and [`slice::rotate_left`], so a panicking
//! predicate leaves the slice as some permutation of its input, with nothing lost or duplicated.

pub mod heap;
pub mod partition;
pub mod select;
pub mod sort;

#[doc(inline)]
pub use heap::{
    make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap,
    sort_heap_by,
};
#[doc(inline)]
pub use partition::{partition_by, stable_partition_by};
#[doc(inline)]
pub use select::{heap_select_by, nth_element, nth_element_by, nth_element_by_key};
#[doc(inline)]
pub use sort::{
    inplace_merge, inplace_merge_by, merge, merge_by, partial_sort, partial_sort_by, sort, sort_by,
    stable_sort, stable_sort_by,
};

/// The depth limit used by introselect and introsort: `2 * floor(log2(len))`.
pub(crate) const fn depth_limit(len: usize) -> u32 {
    if len == 0 { 0 } else { 2 * len.ilog2() }
}
