//! Conversion between limb sequences and digit strings in bases 2 to 36.
//!
//! [`from_chars`] follows the contract of C++'s `std::from_chars`: it parses the longest run of
//! digits at the start of the input, reports how far it got and leaves the output alone on failure.

mod error;
mod from_chars;
mod to_chars;

pub use error::*;
pub use from_chars::*;
pub use to_chars::*;
