use std::fmt;

use logos::{Lexer, Logos};
use tracing::{trace, warn};

use crate::interpreter::value::Buffer;

/// Represents a lexical token in the source input.
///
/// The lexer works on raw bytes, so input that is not valid UTF-8 is still
/// tokenized; any byte that does not start a token is reported and dropped.
/// End of input has no variant of its own: the tokenizer simply yields `None`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(source = [u8])]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A maximal run of ASCII digits, such as `0042`.
    #[regex(r"[0-9]+", |lex| Buffer::new(lex.slice()))]
    Str(Buffer),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.`
    #[token(".")]
    Dot,
    /// `^`
    #[token("^")]
    Caret,
    /// Spaces, tabs, backspaces, vertical tabs, carriage returns and newlines.
    #[regex(r"[ \t\x08\x0B\r\n]+", |lex| {
        let newlines     = lex.slice().iter().filter(|&&b| b == b'\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Whitespace,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(buf) => write!(f, "{buf}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Dot => write!(f, "."),
            Self::Caret => write!(f, "^"),
            Self::Whitespace => write!(f, "<whitespace>"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Produces tokens one at a time from a byte source.
///
/// Unrecognized bytes never stop tokenization: each one is logged as a
/// warning, counted, and skipped.
pub struct Tokenizer<'src> {
    lexer:        Lexer<'src, Token>,
    unrecognized: usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        Self { lexer:        Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               unrecognized: 0, }
    }

    /// Lexes the next token along with the line it starts on.
    ///
    /// Returns `None` once the input is exhausted, and keeps returning `None`
    /// on every later call.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::lexer::{Token, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new(b"12 ^\n3");
    /// assert!(matches!(tokenizer.next_token(), Some((Token::Str(_), 1))));
    /// assert_eq!(tokenizer.next_token(), Some((Token::Caret, 1)));
    /// assert!(matches!(tokenizer.next_token(), Some((Token::Str(_), 2))));
    /// assert_eq!(tokenizer.next_token(), None);
    /// ```
    pub fn next_token(&mut self) -> Option<(Token, usize)> {
        loop {
            match self.lexer.next()? {
                Ok(token) => {
                    trace!(%token, line = self.lexer.extras.line, "lexed token");
                    return Some((token, self.lexer.extras.line));
                },
                Err(()) => {
                    warn!("Ignoring unrecognized character '{}' in input (line {})",
                          self.lexer.slice().escape_ascii(),
                          self.lexer.extras.line);
                    self.unrecognized += 1;
                },
            }
        }
    }

    /// The line the tokenizer has reached.
    #[must_use]
    pub fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// How many unrecognized characters have been skipped so far.
    #[must_use]
    pub const fn unrecognized(&self) -> usize {
        self.unrecognized
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
