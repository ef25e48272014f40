use derive_more::{Display, Error};

/// A position handed to an algorithm lies outside the range it operates on.
#[derive(Debug, Display, Error)]
#[display("index {index} out of bounds for range with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    /// Returns `Ok` if `index <= len`, the valid positions for a one-past-the-end style argument.
    pub const fn check_inclusive(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
        if index > len {
            Err(IndexOutOfBounds { index, len })
        } else {
            Ok(())
        }
    }
}
