/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// alphabet and numbers with a misplaced decimal point.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a syntax tree from
/// tokens, such as unexpected tokens, unbalanced parentheses and invalid
/// assignment targets.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a syntax
/// tree: undefined variables, division by zero and results outside a
/// function's domain.
pub mod eval_error;
/// The caller-facing failure record.
///
/// Every stage error is converted into a [`Failure`] carrying the stage it
/// came from, its [`ErrorKind`] and a human readable message.
pub mod failure;

pub use eval_error::EvalError;
pub use failure::{ErrorKind, Failure, Stage};
pub use lex_error::LexError;
pub use parse_error::ParseError;
