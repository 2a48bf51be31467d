use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'a, I> Parser<'a, I> where I: Iterator<Item = &'a (Token, usize)>
{
    /// Consumes a `)` closing the `(` at `opened_at`.
    ///
    /// # Errors
    /// Returns `ExpectedClosingParen` if the next token is anything else,
    /// including the end of input.
    pub(in crate::interpreter::parser) fn expect_closing_paren(&mut self,
                                                               opened_at: usize)
                                                               -> ParseResult<()> {
        match self.tokens.next_if(|entry| entry.0 == Token::RParen) {
            Some(_) => Ok(()),
            None => Err(ParseError::ExpectedClosingParen { opened_at }),
        }
    }
}
