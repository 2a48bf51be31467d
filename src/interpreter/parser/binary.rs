use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, Parser},
    },
};

/// Binding power of `=`.
pub const ASSIGNMENT_POWER: u8 = 10;
/// Binding power of binary `+` and `-`.
pub const ADDITIVE_POWER: u8 = 20;
/// Binding power of `*` and `/`.
pub const MULTIPLICATIVE_POWER: u8 = 30;
/// Binding power of `^`.
pub const EXPONENT_POWER: u8 = 40;
/// Binding power used for the operand of prefix `+` and `-`.
pub const PREFIX_POWER: u8 = 100;

/// Returns the infix binding power of a token.
///
/// Higher binds tighter. Tokens that cannot appear in infix position have no
/// binding power, which ends the operator loop of the parser.
///
/// # Example
/// ```
/// use prattle::interpreter::{lexer::Token, parser::binary::binding_power};
///
/// assert_eq!(binding_power(&Token::Star), Some(30));
/// assert_eq!(binding_power(&Token::RParen), None);
/// ```
#[must_use]
pub const fn binding_power(token: &Token) -> Option<u8> {
    match token {
        Token::Equals => Some(ASSIGNMENT_POWER),
        Token::Plus | Token::Minus => Some(ADDITIVE_POWER),
        Token::Star | Token::Slash => Some(MULTIPLICATIVE_POWER),
        Token::Caret => Some(EXPONENT_POWER),
        _ => None,
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not arithmetic infix operators,
/// including `=`.
///
/// # Example
/// ```
/// use prattle::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

impl<'a, I> Parser<'a, I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses the left denotation of `op`: the construct an infix token forms
    /// with the already parsed `left` operand.
    ///
    /// `+`, `-`, `*` and `/` are left-associative: the right operand is
    /// parsed at the operator's own power, so an equal-power operator that
    /// follows ends it. `^` and `=` are right-associative: the right operand
    /// is parsed one below, so `2^3^2` is `2^(3^2)` and `a = b = 1` is
    /// `a = (b = 1)`.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if `left` of `=` is not a variable.
    /// - `UnsupportedOperator` if `op` is not an infix operator.
    /// - Propagates any errors from parsing the right operand.
    pub(in crate::interpreter::parser) fn led(&mut self,
                                              op: &Token,
                                              position: usize,
                                              left: Node)
                                              -> ParseResult<Node> {
        if *op == Token::Equals {
            return self.parse_assignment(left, position);
        }

        let (Some(operator), Some(power)) = (token_to_binary_operator(op), binding_power(op)) else {
            return Err(ParseError::UnsupportedOperator { token: op.to_string(),
                                                         position });
        };

        let right = match operator {
            BinaryOperator::Pow => self.expression(power - 1)?,
            _ => self.expression(power)?,
        };

        let height = left.height.max(right.height) + 1;
        self.node(Expr::binary(operator, left.expr, right.expr), height)
    }

    /// Parses the value side of `name = value`.
    fn parse_assignment(&mut self, target: Node, position: usize) -> ParseResult<Node> {
        match target.expr {
            Expr::Variable(name) => {
                let value = self.expression(ASSIGNMENT_POWER - 1)?;
                self.node(Expr::assignment(name, value.expr), value.height + 1)
            },
            other => Err(ParseError::InvalidAssignmentTarget { target: other.to_string(),
                                                               position }),
        }
    }
}
