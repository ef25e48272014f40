mod big_int;
mod error;

pub use big_int::*;
pub use error::*;
