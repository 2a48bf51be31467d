use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during lexing.
///
/// Positions are 0-based character indexes into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is not part of the expression alphabet.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts.
        position:  usize,
    },
    /// A number whose decimal point lacks a digit on one side, such as `5.`
    /// or `.5`.
    #[error("Malformed number '{text}' at position {position}: a decimal point needs a digit on both sides.")]
    MalformedNumber {
        /// The offending run of digits and points.
        text:     String,
        /// Where the run starts.
        position: usize,
    },
    /// A well-formed literal too large to be represented as a finite `f64`.
    #[error("Number '{text}' at position {position} is too large.")]
    NumberOutOfRange {
        /// The literal as written.
        text:     String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the taxonomy entry for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::MalformedNumber { .. } | Self::NumberOutOfRange { .. } => {
                ErrorKind::MalformedNumber
            },
        }
    }

    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::NumberOutOfRange { position, .. } => *position,
        }
    }
}
