use tracing::trace;

use crate::interpreter::lexer::{Token, Tokenizer};

/// A token paired with the source line it starts on.
pub type Lexeme = (Token, usize);

/// A two-token window over a [`Tokenizer`].
///
/// The cursor always holds the current token and the one after it, already
/// lexed. `None` in either slot means end of input. The second slot exists for
/// the repeat operator, whose parse decides how to read its right operand by
/// looking one token past the operand's first token.
pub struct Cursor<'src> {
    tokenizer: Tokenizer<'src>,
    current:   Option<Lexeme>,
    next:      Option<Lexeme>,
}

impl<'src> Cursor<'src> {
    /// Lexes the first two tokens of `source`.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::{cursor::Cursor, lexer::Token};
    ///
    /// let cursor = Cursor::new(b"(^");
    /// assert_eq!(cursor.peek(), Some(&(Token::LParen, 1)));
    /// assert_eq!(cursor.peek_next(), Some(&(Token::Caret, 1)));
    /// ```
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token();
        let next = tokenizer.next_token();
        Self { tokenizer,
               current,
               next }
    }

    /// The current token, without consuming it.
    #[must_use]
    pub const fn peek(&self) -> Option<&Lexeme> {
        self.current.as_ref()
    }

    /// The token after the current one, without consuming anything.
    #[must_use]
    pub const fn peek_next(&self) -> Option<&Lexeme> {
        self.next.as_ref()
    }

    /// Drops the current token, promotes the next one and lexes a new next.
    ///
    /// Returns the token that was dropped from the window so callers can take
    /// ownership of its payload instead of copying it.
    pub fn advance(&mut self) -> Option<Lexeme> {
        let fresh = self.tokenizer.next_token();
        let promoted = std::mem::replace(&mut self.next, fresh);
        let consumed = std::mem::replace(&mut self.current, promoted);
        trace!(consumed = ?consumed.as_ref().map(|(token, _)| token), "advanced cursor");
        consumed
    }

    /// The line of the current token, or the last line reached once the input
    /// is exhausted.
    #[must_use]
    pub fn line(&self) -> usize {
        self.current
            .as_ref()
            .map_or_else(|| self.tokenizer.line(), |(_, line)| *line)
    }

    /// How many unrecognized characters the underlying tokenizer skipped.
    #[must_use]
    pub const fn unrecognized(&self) -> usize {
        self.tokenizer.unrecognized()
    }
}
