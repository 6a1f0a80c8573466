use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// Splits one input line into [`Token`]s on demand.
///
/// The lexer wraps the `logos` generated state machine and adds the two token
/// kinds it cannot produce itself: any character no rule matches becomes a
/// [`TokenKind::Illegal`] token carrying that character, and the end of the
/// input is reported as [`TokenKind::Eof`] on every call once it is reached.
///
/// ## Example
/// ```
/// use calcline::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("2 * pi");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Asterisk);
/// assert_eq!(lexer.next_token().literal, "pi");
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, TokenKind>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self { inner:     TokenKind::lexer(input),
               exhausted: false, }
    }

    /// Returns the next token and advances past it.
    ///
    /// Whitespace (space, tab, carriage return, newline) is skipped first.
    /// After the input is exhausted every call returns a fresh
    /// [`TokenKind::Eof`] token positioned at the end of the input.
    pub fn next_token(&mut self) -> Token {
        if self.exhausted {
            return Token::eof(self.inner.source().len());
        }

        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.inner.span().start),
            Some(Err(())) => {
                Token::new(TokenKind::Illegal, self.inner.slice(), self.inner.span().start)
            },
            None => {
                self.exhausted = true;
                Token::eof(self.inner.source().len())
            },
        }
    }
}

/// Yields every token of the line up to, but not including, end of input.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}
