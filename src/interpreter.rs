/// The environment module holds session-scoped variable bindings.
///
/// An [`environment::Environment`] maps variable names to the last value
/// assigned to them. It is owned by a session and passed explicitly to every
/// evaluation; there is no global state.
pub mod environment;
/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator matches exhaustively on the expression variants, performs
/// the arithmetic, calls builtin functions, and commits assignments to the
/// environment.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Reports runtime errors such as division by zero, undefined variables and
///   results outside a function's domain.
/// - Bounds recursion depth for hand-built trees.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the character position it starts at. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers, function keywords and operators.
/// - Skips whitespace.
/// - Reports invalid characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: each token has a prefix meaning (`nud`), an
/// infix meaning (`led`) or both, and a binding power table decides how far
/// each operator reaches.
///
/// # Responsibilities
/// - Resolves precedence and associativity.
/// - Validates parentheses, function call syntax and assignment targets.
/// - Rejects trailing tokens after a complete expression.
pub mod parser;
/// The session module ties the stages together.
///
/// A [`session::Session`] owns one environment and exposes the two operations
/// callers use: submitting an expression and resetting the bindings.
pub mod session;
