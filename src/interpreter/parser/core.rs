use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::binding_power},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A parsed subtree together with its height, counted like [`Expr::depth`].
pub(in crate::interpreter::parser) struct Node {
    pub(in crate::interpreter::parser) expr:   Expr,
    pub(in crate::interpreter::parser) height: usize,
}

/// A Pratt parser over a stream of `(Token, position)` pairs.
///
/// The parser looks at most one token ahead and never backtracks. Each
/// parser consumes its token stream, so a new one is created for every
/// expression.
///
/// `max_depth` bounds both the recursion of the parser and the height of the
/// tree it builds. A flat chain such as `1 + 1 + ... + 1` is parsed without
/// recursion but still grows the tree, so it is rejected once it is taller
/// than the limit.
///
/// # Example
/// ```
/// use prattle::interpreter::{lexer::lex, parser::Parser};
///
/// let tokens = lex("2 + 3 * 4").unwrap();
/// let expr = Parser::new(tokens.iter()).parse().unwrap().unwrap();
///
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub struct Parser<'a, I>
    where I: Iterator<Item = &'a (Token, usize)>
{
    pub(in crate::interpreter::parser) tokens: Peekable<I>,
    depth:                                     usize,
    max_depth:                                 usize,
}

impl<'a, I> Parser<'a, I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Creates a parser with the default nesting limit.
    pub fn new(tokens: I) -> Self {
        Self { tokens:    tokens.peekable(),
               depth:     0,
               max_depth: DEFAULT_MAX_DEPTH, }
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole token stream into a single expression.
    ///
    /// Returns `Ok(None)` when the stream is empty. Every token must be
    /// consumed: anything left after a complete expression is reported as
    /// [`ParseError::TrailingToken`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first syntax problem.
    pub fn parse(mut self) -> ParseResult<Option<Expr>> {
        if self.tokens.peek().is_none() {
            return Ok(None);
        }

        let Node { expr, .. } = self.expression(0)?;

        if let Some((token, position)) = self.tokens.next() {
            return Err(ParseError::TrailingToken { token:    token.to_string(),
                                                   position: *position, });
        }

        debug!(%expr, "parsed expression");
        Ok(Some(expr))
    }

    /// Parses an expression whose operators all bind tighter than
    /// `min_power`.
    ///
    /// This is the heart of the Pratt parser: the first token is handed to
    /// the prefix parser, then infix operators are folded in for as long as
    /// the lookahead binds more strongly than `min_power`.
    ///
    /// # Errors
    /// Fails with [`ParseError::ExpressionTooComplex`] when the nesting
    /// limit is exceeded or the tree grows taller than it, and with [`ParseError::UnexpectedEndOfInput`] when
    /// no token is left to start the expression.
    pub(in crate::interpreter::parser) fn expression(&mut self, min_power: u8) -> ParseResult<Node> {
        if self.depth >= self.max_depth {
            return Err(ParseError::ExpressionTooComplex { max_depth: self.max_depth });
        }

        self.depth += 1;
        let result = self.fold_operators(min_power);
        self.depth -= 1;
        result
    }

    fn fold_operators(&mut self, min_power: u8) -> ParseResult<Node> {
        let (token, position) = self.tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
        let mut left = self.nud(token, *position)?;

        while let Some((op, position)) =
            self.tokens
                .next_if(|entry| binding_power(&entry.0).is_some_and(|power| power > min_power))
        {
            left = self.led(op, *position, left)?;
        }

        Ok(left)
    }

    /// Wraps `expr` after checking its height against the limit.
    ///
    /// # Errors
    /// Fails with [`ParseError::ExpressionTooComplex`] when `height` exceeds
    /// the limit.
    pub(in crate::interpreter::parser) fn node(&self,
                                               expr: Expr,
                                               height: usize)
                                               -> ParseResult<Node> {
        if height > self.max_depth {
            return Err(ParseError::ExpressionTooComplex { max_depth: self.max_depth });
        }
        Ok(Node { expr, height })
    }
}

/// Parses a complete token sequence.
///
/// Convenience wrapper around [`Parser::new`] and [`Parser::parse`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntax problem.
///
/// # Example
/// ```
/// use prattle::interpreter::{lexer::lex, parser::parse};
///
/// assert_eq!(parse(&lex("").unwrap()).unwrap(), None);
/// assert!(parse(&lex("2 +").unwrap()).is_err());
/// ```
pub fn parse<'a, T>(tokens: T) -> ParseResult<Option<Expr>>
    where T: IntoIterator<Item = &'a (Token, usize)>
{
    Parser::new(tokens.into_iter()).parse()
}
