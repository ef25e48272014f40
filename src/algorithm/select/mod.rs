//! Selection: [`nth_element`] (introselect with a heap-selection fallback) and [`heap_select_by`].

mod select;

pub use select::*;
pub(crate) use select::heap_select_with;
