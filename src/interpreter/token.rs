use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// Most kinds are recognized directly by the generated `logos` lexer. The two
/// remaining kinds are synthesized by [`crate::interpreter::lexer::Lexer`]:
/// [`TokenKind::Illegal`] for characters no rule matches and
/// [`TokenKind::Eof`] once the input is exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// A character that does not start any token.
    Illegal,
    /// End of input.
    Eof,
    /// `,`
    #[token(",")]
    Comma,
    /// Identifier tokens; a run of letters and underscores such as `sqrt`.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Numeric literal text; a run of digits and dots such as `3.14`.
    ///
    /// Runs such as `1.2.3` are accepted here and rejected or shortened when
    /// the parser converts the text to a number.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
}

/// Binding power of an operator token, from weakest to strongest.
///
/// The parser keeps extending an expression while the upcoming token binds
/// strictly tighter than the current minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level for a full expression.
    Lowest,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `^`
    Exponent,
    /// Unary `-`
    Prefix,
    /// `f(x)`
    Call,
}

impl TokenKind {
    /// Returns the precedence this kind has when it continues an expression.
    ///
    /// ## Example
    /// ```
    /// use calcline::interpreter::token::{Precedence, TokenKind};
    ///
    /// assert_eq!(TokenKind::Caret.precedence(), Precedence::Exponent);
    /// assert!(TokenKind::Plus.precedence() < TokenKind::Asterisk.precedence());
    /// assert_eq!(TokenKind::RParen.precedence(), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => Precedence::Sum,
            Self::Asterisk | Self::Slash => Precedence::Product,
            Self::Caret => Precedence::Exponent,
            Self::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }

    /// The upper-case name printed by the token dump.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comma => "COMMA",
            Self::Ident => "IDENT",
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Caret => "CARET",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit taken from an input line.
///
/// Tokens are handed out by value. Whoever receives one owns it: the parser
/// either moves it into the syntax tree node it builds or drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text of the token. Empty for [`TokenKind::Eof`].
    pub literal:  String,
    /// Byte offset of the token in the input line.
    pub position: usize,
}

impl Token {
    /// Creates a token from its kind, text and byte offset.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               position }
    }

    /// Creates the end-of-input token located at `position`.
    #[must_use]
    pub const fn eof(position: usize) -> Self {
        Self { kind: TokenKind::Eof,
               literal: String::new(),
               position }
    }

    /// Length of the literal text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literal.len()
    }

    /// Whether the literal text is empty, which only holds for end of input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    /// Whether the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// One-based column of the token, used in diagnostics.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position + 1
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ Type: {}, Literal: '{}' }}", self.kind, self.literal)
    }
}
