use derive_more::{Display, Error, From, IsVariant};

use crate::bigint::chars::FromCharsError;

/// The digits were followed by something else.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unexpected character at index {index}")]
pub struct TrailingCharactersError {
    pub index: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum ParseBigIntError {
    FromChars(FromCharsError),
    TrailingCharacters(TrailingCharactersError),
}
