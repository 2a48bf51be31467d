use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of `/` was exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operation produced a value that is not a finite number, such as
    /// `sqrt(-1)`, `log(0)` or `10 ^ 400`.
    #[error("Math domain error: {operation} is not a finite number.")]
    MathDomain {
        /// The rendered operation that failed.
        operation: String,
    },
    /// Called a function that is not a builtin.
    #[error("Unsupported function '{name}'.")]
    UnsupportedFunction {
        /// The name of the function.
        name: String,
    },
    /// The tree nests deeper than the configured limit.
    #[error("Expression is too complex: nesting exceeds {max_depth} levels.")]
    ExpressionTooComplex {
        /// The configured nesting limit.
        max_depth: usize,
    },
}

impl EvalError {
    /// Returns the taxonomy entry for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::MathDomain { .. } => ErrorKind::MathDomain,
            Self::UnsupportedFunction { .. } => ErrorKind::UnsupportedFunction,
            Self::ExpressionTooComplex { .. } => ErrorKind::ExpressionTooComplex,
        }
    }
}
