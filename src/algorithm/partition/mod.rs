//! Partitioning primitives: the median-of-three Hoare partition that drives introselect and
//! introsort, plus predicate partitions (`partition`, `stable_partition`).

mod partition;
mod tests;

pub use partition::*;
pub(crate) use partition::apply_permutation;
