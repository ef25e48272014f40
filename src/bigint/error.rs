use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("attempt to divide by zero")]
pub struct DivideByZeroError;

/// The exact result of an operation doesn't fit in the width of its container.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("result overflows the width of its limb container")]
pub struct OverflowError;
