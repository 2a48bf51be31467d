use std::fmt;

use thiserror::Error;

use crate::error::{EvalError, LexError, ParseError};

/// The pipeline stage an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Text to tokens.
    Lex,
    /// Tokens to syntax tree.
    Parse,
    /// Syntax tree to value.
    Eval,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Lex => "lex",
                        Self::Parse => "parse",
                        Self::Eval => "eval",
                    })
    }
}

/// The closed taxonomy of failures a submission can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MalformedNumber,
    UnexpectedToken,
    MissingParenthesis,
    InvalidAssignmentTarget,
    UnsupportedOperator,
    TrailingToken,
    UndefinedVariable,
    DivisionByZero,
    MathDomain,
    UnsupportedFunction,
    ExpressionTooComplex,
}

impl ErrorKind {
    /// Returns the canonical name of the kind, e.g. `DivisionByZeroError`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "InvalidCharacterError",
            Self::MalformedNumber => "MalformedNumberError",
            Self::UnexpectedToken => "UnexpectedTokenError",
            Self::MissingParenthesis => "MissingParenthesisError",
            Self::InvalidAssignmentTarget => "InvalidAssignmentTargetError",
            Self::UnsupportedOperator => "UnsupportedOperatorError",
            Self::TrailingToken => "TrailingTokenError",
            Self::UndefinedVariable => "UndefinedVariableError",
            Self::DivisionByZero => "DivisionByZeroError",
            Self::MathDomain => "MathDomainError",
            Self::UnsupportedFunction => "UnsupportedFunctionError",
            Self::ExpressionTooComplex => "ExpressionTooComplexError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A structured failure returned to the caller of a submission.
///
/// ```
/// use prattle::{
///     error::{ErrorKind, Failure, Stage},
///     interpreter::session::Session,
/// };
///
/// let mut session = Session::new();
/// let failure: Failure = session.submit("1 / 0").unwrap_err();
///
/// assert_eq!(failure.stage, Stage::Eval);
/// assert_eq!(failure.kind, ErrorKind::DivisionByZero);
/// assert_eq!(failure.message, "Division by zero.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({stage}): {message}")]
pub struct Failure {
    /// The stage the error came from.
    pub stage:   Stage,
    /// What went wrong.
    pub kind:    ErrorKind,
    /// Human readable details.
    pub message: String,
}

impl From<LexError> for Failure {
    fn from(error: LexError) -> Self {
        Self { stage:   Stage::Lex,
               kind:    error.kind(),
               message: error.to_string(), }
    }
}

impl From<ParseError> for Failure {
    fn from(error: ParseError) -> Self {
        Self { stage:   Stage::Parse,
               kind:    error.kind(),
               message: error.to_string(), }
    }
}

impl From<EvalError> for Failure {
    fn from(error: EvalError) -> Self {
        Self { stage:   Stage::Eval,
               kind:    error.kind(),
               message: error.to_string(), }
    }
}
