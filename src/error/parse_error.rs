use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during parsing.
///
/// Positions are 0-based character indexes of the token the error refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start an expression.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of input: expected an operand.")]
    UnexpectedEndOfInput,
    /// A function name was not followed by `(`.
    #[error("Function '{function}' at position {position} must be followed by '('.")]
    ExpectedOpeningParen {
        /// The function name.
        function: String,
        /// Where the function name starts.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' for the '(' at position {opened_at}.")]
    ExpectedClosingParen {
        /// Where the unmatched `(` starts.
        opened_at: usize,
    },
    /// The left side of `=` is not a variable.
    #[error("Only variables can be assigned, found '{target}' before the '=' at position {position}.")]
    InvalidAssignmentTarget {
        /// The rendered left-hand side.
        target:   String,
        /// Where the `=` starts.
        position: usize,
    },
    /// An infix position held a token that is not an infix operator.
    #[error("Unsupported operator '{token}' at position {position}.")]
    UnsupportedOperator {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra token '{token}' at position {position} after a complete expression.")]
    TrailingToken {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Expression is too complex: nesting exceeds {max_depth} levels.")]
    ExpressionTooComplex {
        /// The configured nesting limit.
        max_depth: usize,
    },
}

impl ParseError {
    /// Returns the taxonomy entry for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedToken { .. } | Self::UnexpectedEndOfInput => {
                ErrorKind::UnexpectedToken
            },
            Self::ExpectedOpeningParen { .. } | Self::ExpectedClosingParen { .. } => {
                ErrorKind::MissingParenthesis
            },
            Self::InvalidAssignmentTarget { .. } => ErrorKind::InvalidAssignmentTarget,
            Self::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            Self::TrailingToken { .. } => ErrorKind::TrailingToken,
            Self::ExpressionTooComplex { .. } => ErrorKind::ExpressionTooComplex,
        }
    }
}
