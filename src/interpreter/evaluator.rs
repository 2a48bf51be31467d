/// Core evaluation logic.
///
/// Contains the evaluator, the dispatch over expression variants, variable
/// lookup, assignment and the nesting guard.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix `+` and `-`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `/` and `^`, including the division by zero and
/// domain checks.
pub mod binary;

/// Function evaluation.
///
/// Holds the builtin function table and evaluates calls against it.
pub mod function;

/// Utility functions for the evaluator.
pub mod utils;

pub use self::core::{EvalResult, Evaluator, evaluate};
