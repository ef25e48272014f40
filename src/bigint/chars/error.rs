use derive_more::{Display, Error, IsVariant};

/// The reasons [`from_chars`](super::from_chars) can fail. In both cases the output value is left
/// unchanged.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum FromCharsError {
    /// The input doesn't start with a digit of the base.
    #[display("no digits to parse")]
    InvalidArgument,
    /// The digits are valid but their value doesn't fit. `ptr` is the index just past the last
    /// digit.
    #[display("value of the digits before index {ptr} is out of range")]
    ResultOutOfRange { ptr: usize },
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{needed} digits don't fit in a buffer of {available} bytes")]
pub struct ValueTooLargeError {
    pub needed: usize,
    pub available: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("base {base} is not between 2 and 36")]
pub struct InvalidBaseError {
    pub base: u32,
}

impl InvalidBaseError {
    pub const fn check(base: u32) -> Result<(), InvalidBaseError> {
        if !matches!(base, 2..=36) {
            Err(InvalidBaseError { base })
        } else {
            Ok(())
        }
    }
}
