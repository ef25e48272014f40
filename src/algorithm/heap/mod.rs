//! Binary max-heap primitives over slices, mirroring `make_heap`, `push_heap`, `pop_heap` and
//! `sort_heap`.
//!
//! A slice is a heap with respect to `is_less` when no element is less than either of its children,
//! with the children of index `i` at `2i + 1` and `2i + 2`. The greatest element sits at index 0.

mod heap;

pub use heap::*;
pub(crate) use heap::{sift_down, sort_heap_with};
