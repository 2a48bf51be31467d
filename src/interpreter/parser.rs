/// Parser state and the Pratt expression loop.
///
/// Holds the one-token lookahead, the nesting guard and the top-level
/// `parse` entry point.
pub mod core;
/// Prefix (null denotation) parsing.
///
/// Literals, variables, prefix `+`/`-`, function calls and parenthesized
/// groups.
pub mod unary;
/// Infix (left denotation) parsing.
///
/// Binary arithmetic operators and assignment, together with the binding
/// power table that drives the Pratt loop.
pub mod binary;
/// Small helpers shared by the prefix and infix parsers.
pub mod utils;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, Parser, parse};
