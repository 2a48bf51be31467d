use std::{fmt, iter::FusedIterator};

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Only [`Token::Number`] and [`Token::Variable`] carry a payload; every other
/// variant stands for a fixed piece of source text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A decimal point needs at least one digit on each side, so `5.` and
    /// `.5` are rejected instead of being padded with a zero. Literals beyond
    /// the range of `f64` are rejected too.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.", malformed_number)]
    #[regex(r"\.[0-9]*", malformed_number)]
    Number(f64),
    /// Identifier tokens that are not function keywords, such as `x` or
    /// `rate_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `log`
    #[token("log")]
    Log,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `exp`
    #[token("exp")]
    Exp,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The payload-free discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Variable,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Equal,
    LeftParen,
    RightParen,
    Sqrt,
    Log,
    Sin,
    Cos,
    Exp,
}

impl Token {
    /// Returns the kind of this token, dropping any payload.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Variable(_) => TokenKind::Variable,
            Self::Sqrt => TokenKind::Sqrt,
            Self::Log => TokenKind::Log,
            Self::Sin => TokenKind::Sin,
            Self::Cos => TokenKind::Cos,
            Self::Exp => TokenKind::Exp,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Multiply,
            Self::Slash => TokenKind::Divide,
            Self::Caret => TokenKind::Power,
            Self::Equals => TokenKind::Equal,
            Self::LParen => TokenKind::LeftParen,
            Self::RParen => TokenKind::RightParen,
        }
    }

    /// Returns the function name if this token is a function keyword.
    ///
    /// ```
    /// use prattle::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Sqrt.function_name(), Some("sqrt"));
    /// assert_eq!(Token::Plus.function_name(), None);
    /// ```
    #[must_use]
    pub const fn function_name(&self) -> Option<&'static str> {
        match self {
            Self::Sqrt => Some("sqrt"),
            Self::Log => Some("log"),
            Self::Sin => Some("sin"),
            Self::Cos => Some("cos"),
            Self::Exp => Some("exp"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.function_name() {
            return f.write_str(name);
        }
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::Equals => f.write_str("="),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Sqrt | Self::Log | Self::Sin | Self::Cos | Self::Exp => Ok(()),
        }
    }
}

/// Failure reported by the generated lexer before a position is attached.
///
/// Logos yields the default variant for input no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    #[default]
    InvalidCharacter,
    MalformedNumber,
    NumberOutOfRange,
}

fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    let value: f64 = lex.slice().parse().map_err(|_| LexFault::MalformedNumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexFault::NumberOutOfRange)
    }
}

fn malformed_number(_lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    Err(LexFault::MalformedNumber)
}

/// A single-pass token stream over one source string.
///
/// The lexer yields `(Token, position)` pairs, where `position` is the
/// 0-based character index of the token's first character. It is lazy and
/// finite, and it cannot be restarted: tokenizing the same text again needs
/// a fresh `Lexer`. After the first error it yields nothing further.
///
/// ```
/// use prattle::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("x = 2").collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Variable("x".to_string()), 0),
///                 (Token::Equals, 2),
///                 (Token::Number(2.0), 4)]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    byte_pos: usize,
    char_pos: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Token::lexer(source),
               byte_pos: 0,
               char_pos: 0,
               finished: false, }
    }

    /// Converts a byte offset into a character index.
    ///
    /// Offsets only move forward, so the count resumes from the previous call.
    fn char_position(&mut self, byte: usize) -> usize {
        let source = self.inner.source();
        self.char_pos += source[self.byte_pos..byte].chars().count();
        self.byte_pos = byte;
        self.char_pos
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.inner.next() else {
            self.finished = true;
            return None;
        };

        let span = self.inner.span();
        let position = self.char_position(span.start);

        match result {
            Ok(token) => {
                trace!(%token, position, "lexed token");
                Some(Ok((token, position)))
            },
            Err(fault) => {
                self.finished = true;
                let error = match fault {
                    LexFault::InvalidCharacter => {
                        let character = self.inner.source()[span.start..].chars()
                                                                        .next()
                                                                        .unwrap_or('\u{fffd}');
                        LexError::InvalidCharacter { character,
                                                     position }
                    },
                    LexFault::MalformedNumber => {
                        LexError::MalformedNumber { text: self.inner.slice().to_string(),
                                                    position }
                    },
                    LexFault::NumberOutOfRange => {
                        LexError::NumberOutOfRange { text: self.inner.slice().to_string(),
                                                     position }
                    },
                };
                Some(Err(error))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Returns a lazy token stream over `source`.
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenizes `source` completely.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use prattle::{error::LexError, interpreter::lexer::lex};
///
/// assert_eq!(lex("2 + 3").unwrap().len(), 3);
/// assert!(matches!(lex("2 $ 3"),
///                  Err(LexError::InvalidCharacter { character: '$', position: 2 })));
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    tokenize(source).collect()
}
