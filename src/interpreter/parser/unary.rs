use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::PREFIX_POWER,
            core::{Node, ParseResult, Parser},
        },
    },
};

impl<'a, I> Parser<'a, I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Parses the null denotation of `token`: the construct a token forms
    /// when it starts an expression.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     nud := number
    ///          | variable
    ///          | ("+" | "-") expression(100)
    ///          | function "(" expression(0) ")"
    ///          | "(" expression(0) ")"
    /// ```
    ///
    /// # Parameters
    /// - `token`: The token just consumed.
    /// - `position`: Where `token` starts.
    ///
    /// # Errors
    /// - `UnexpectedToken` if `token` cannot start an expression.
    /// - Propagates any errors from sub-expression parsing.
    pub(in crate::interpreter::parser) fn nud(&mut self,
                                              token: &Token,
                                              position: usize)
                                              -> ParseResult<Node> {
        if let Some(name) = token.function_name() {
            return self.parse_function_call(name, position);
        }

        match token {
            Token::Number(value) => self.node(Expr::Number(*value), 1),
            Token::Variable(name) => self.node(Expr::Variable(name.clone()), 1),
            Token::Plus => self.parse_prefix(UnaryOperator::Plus),
            Token::Minus => self.parse_prefix(UnaryOperator::Negate),
            Token::LParen => self.parse_grouping(position),
            tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     position }),
        }
    }

    /// Parses the operand of a prefix `+` or `-`.
    ///
    /// The operand is parsed at prefix power, which is higher than any infix
    /// operator, so the prefix only captures the next primary: `-2^2` is
    /// `(-2)^2`.
    fn parse_prefix(&mut self, op: UnaryOperator) -> ParseResult<Node> {
        let operand = self.expression(PREFIX_POWER)?;
        self.node(Expr::unary(op, operand.expr), operand.height + 1)
    }

    /// Parses `name "(" expression ")"` after the function keyword.
    fn parse_function_call(&mut self, name: &str, position: usize) -> ParseResult<Node> {
        let Some((_, opened_at)) = self.tokens.next_if(|entry| entry.0 == Token::LParen) else {
            return Err(ParseError::ExpectedOpeningParen { function: name.to_string(),
                                                          position });
        };

        let argument = self.expression(0)?;
        self.expect_closing_paren(*opened_at)?;

        self.node(Expr::call(name, argument.expr), argument.height + 1)
    }

    /// Parses a parenthesized expression. The parentheses leave no node of
    /// their own in the tree.
    fn parse_grouping(&mut self, opened_at: usize) -> ParseResult<Node> {
        let inner = self.expression(0)?;
        self.expect_closing_paren(opened_at)?;
        Ok(inner)
    }
}
