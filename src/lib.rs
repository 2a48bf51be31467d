//! # prattle
//!
//! prattle is an arithmetic expression calculator written in Rust.
//! It turns a line of text into a number in three stages: a lexer produces
//! tokens, a Pratt parser builds a syntax tree, and a tree-walking evaluator
//! computes the value against a set of session-scoped variable bindings.
//!
//! ```
//! use prattle::{Session, submit};
//!
//! let mut session = Session::new();
//!
//! assert_eq!(submit("r = 2", &mut session), Ok(Some(2.0)));
//! assert_eq!(submit("2 ^ 3 ^ 2 - r * 6", &mut session), Ok(Some(500.0)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the six expression node kinds.
/// - Renders expressions back to a fully parenthesized text form.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing an
/// expression, and the [`error::Failure`] record that reports them to the
/// caller together with the stage they came from.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Maps every error onto the closed [`error::ErrorKind`] taxonomy.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the pipeline from text to value.
///
/// This module ties together lexing, parsing, evaluation and the session
/// state that persists between submissions.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{ErrorKind, Failure, Stage},
    interpreter::session::{Session, SessionConfig, reset_session, submit},
};
