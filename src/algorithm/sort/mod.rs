//! Sorting and merging: introsort ([`sort_by`]), heap-based [`partial_sort_by`], and the stable
//! family built on merging ([`merge_by`], [`inplace_merge_by`], [`stable_sort_by`]).
//!
//! The stable algorithms are adaptive in the same way as their C++ counterparts: they try to get a
//! temporary buffer and fall back to a slower rotation-based strategy without one. Here the buffer
//! holds indices rather than elements, which keeps every element move a plain swap.

mod merge;
mod sort;

pub use merge::*;
pub use sort::*;
pub(crate) use sort::insertion_sort_with;
