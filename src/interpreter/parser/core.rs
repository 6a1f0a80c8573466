use std::mem;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::{
            binary::{parse_call_expression, parse_infix_expression},
            unary::{
                parse_grouped_expression, parse_identifier, parse_number_literal,
                parse_prefix_expression,
            },
        },
        token::{Precedence, Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Handler invoked when a token begins an expression.
///
/// The handler receives ownership of the token that selected it.
pub(crate) type PrefixParseFn = fn(&mut Parser<'_>, Token) -> ParseResult<Expr>;

/// Handler invoked when a token continues an expression.
///
/// The handler receives the already parsed left operand and ownership of the
/// token that selected it.
pub(crate) type InfixParseFn = fn(&mut Parser<'_>, Expr, Token) -> ParseResult<Expr>;

/// Looks up the prefix handler for a token kind.
///
/// Registered kinds: `IDENT`, `NUMBER`, `MINUS` and `LPAREN`.
pub(crate) fn prefix_handler(kind: TokenKind) -> Option<PrefixParseFn> {
    match kind {
        TokenKind::Ident => Some(parse_identifier),
        TokenKind::Number => Some(parse_number_literal),
        TokenKind::Minus => Some(parse_prefix_expression),
        TokenKind::LParen => Some(parse_grouped_expression),
        _ => None,
    }
}

/// Looks up the infix handler for a token kind.
///
/// Registered kinds: the five arithmetic operators and `LPAREN`, which turns
/// the expression on its left into a call.
pub(crate) fn infix_handler(kind: TokenKind) -> Option<InfixParseFn> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Caret => Some(parse_infix_expression),
        TokenKind::LParen => Some(parse_call_expression),
        _ => None,
    }
}

/// A precedence-climbing (Pratt) parser over a single input line.
///
/// The parser keeps exactly one token of lookahead and asks the lexer for the
/// next one whenever it consumes a token. Consumed tokens are moved out to
/// the handler that consumes them.
///
/// ## Example
/// ```
/// use calcline::interpreter::parser::core::Parser;
///
/// let expr = Parser::new("1 + 2 * 3").parse_program().unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token of `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// The token that has not been consumed yet.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Whether the unconsumed token has the given kind.
    #[must_use]
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Consumes the current token and returns it, reading the next one.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Parses the whole line as one expression.
    ///
    /// The expression must be followed by end of input; anything left over is
    /// reported as [`ParseError::UnexpectedTrailingTokens`].
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered. No partial tree is
    /// returned on failure.
    pub fn parse_program(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.current_is(TokenKind::Eof) {
            return Err(ParseError::UnexpectedTrailingTokens { token:  self.current
                                                                          .literal
                                                                          .clone(),
                                                              column: self.current.column(), });
        }

        debug!("parsed {} node(s): {expr}", expr.node_count());
        Ok(expr)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// 1. The prefix handler for the current token produces the left operand.
    /// 2. While the upcoming token is not end of input and binds strictly
    ///    tighter than `precedence`, it is consumed and its infix handler
    ///    combines the left operand with whatever follows.
    ///
    /// Because the infix handlers parse their right operand at the operator's
    /// own precedence, every binary operator is left-associative, `^`
    /// included.
    ///
    /// # Errors
    /// - `IllegalCharacter` or `UnexpectedToken` if the current token cannot
    ///   start an expression.
    /// - `UnexpectedEndOfInput` if the line ends where an operand is needed.
    /// - Propagates any errors from the handlers.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        let prefix = prefix_handler(self.current.kind).ok_or_else(|| self.no_prefix_error())?;
        let token = self.advance();
        let mut left = prefix(self, token)?;

        while !self.current_is(TokenKind::Eof) && precedence < self.current.kind.precedence() {
            let Some(infix) = infix_handler(self.current.kind) else {
                return Err(ParseError::UnexpectedOperator { token:  self.current.literal.clone(),
                                                            column: self.current.column(), });
            };
            let operator = self.advance();
            left = infix(self, left, operator)?;
        }

        Ok(left)
    }

    fn no_prefix_error(&self) -> ParseError {
        let token = &self.current;
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEndOfInput { column: token.column() },
            TokenKind::Illegal => ParseError::IllegalCharacter { character: token.literal.clone(),
                                                                 column:    token.column(), },
            _ => ParseError::UnexpectedToken { token:  token.literal.clone(),
                                               column: token.column(), },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reprint(input: &str) -> String {
        Parser::new(input).parse_program()
                          .unwrap_or_else(|e| panic!("{input:?} failed to parse: {e}"))
                          .to_string()
    }

    fn failure(input: &str) -> ParseError {
        match Parser::new(input).parse_program() {
            Ok(expr) => panic!("{input:?} parsed as {expr}"),
            Err(e) => e,
        }
    }

    #[test]
    fn dispatch_tables_are_split() {
        assert!(prefix_handler(TokenKind::Minus).is_some());
        assert!(infix_handler(TokenKind::Minus).is_some());
        assert!(prefix_handler(TokenKind::LParen).is_some());
        assert!(infix_handler(TokenKind::LParen).is_some());
        assert!(prefix_handler(TokenKind::Plus).is_none());
        assert!(infix_handler(TokenKind::Number).is_none());
        assert!(prefix_handler(TokenKind::Illegal).is_none());
        assert!(prefix_handler(TokenKind::LBrace).is_none());
    }

    #[test]
    fn operator_precedence() {
        assert_eq!(reprint("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(reprint("1 * 2 + 3"), "((1 * 2) + 3)");
        assert_eq!(reprint("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
        assert_eq!(reprint("(1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn binary_operators_are_left_associative() {
        assert_eq!(reprint("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(reprint("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(reprint("2 ^ 3 ^ 2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn negation_binds_tighter_than_exponent() {
        assert_eq!(reprint("-2 ^ 2"), "((-2) ^ 2)");
        assert_eq!(reprint("--3"), "(-(-3))");
        assert_eq!(reprint("1 - -1"), "(1 - (-1))");
    }

    #[test]
    fn calls() {
        assert_eq!(reprint("sqrt(9)"), "sqrt(9)");
        assert_eq!(reprint("sum(1, 5, i * 2)"), "sum(1, 5, (i * 2))");
        assert_eq!(reprint("f()"), "f()");
        assert_eq!(reprint("-sqrt(4)"), "(-sqrt(4))");
        assert_eq!(reprint("2(3)"), "2(3)");
    }

    #[test]
    fn arity_is_not_checked_while_parsing() {
        assert_eq!(reprint("sqrt(1, 2)"), "sqrt(1, 2)");
    }

    #[test]
    fn unmatched_parenthesis() {
        assert!(matches!(failure("(1 + 2"), ParseError::ExpectedClosingParen { column: 7 }));
        assert!(matches!(failure("sqrt(1, 2"), ParseError::ExpectedClosingParen { .. }));
        assert!(matches!(failure("sqrt(1 2)"), ParseError::ExpectedClosingParen { .. }));
    }

    #[test]
    fn missing_operands() {
        assert!(matches!(failure(""), ParseError::UnexpectedEndOfInput { column: 1 }));
        assert!(matches!(failure("1 +"), ParseError::UnexpectedEndOfInput { .. }));
        assert!(matches!(failure("* 2"), ParseError::UnexpectedToken { .. }));
        assert!(matches!(failure("sqrt(1,)"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn illegal_characters() {
        assert_eq!(failure("1 + $"),
                   ParseError::IllegalCharacter { character: "$".to_string(),
                                                  column:    5, });
    }

    #[test]
    fn trailing_tokens() {
        assert!(matches!(failure("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
        assert!(matches!(failure("1)"), ParseError::UnexpectedTrailingTokens { .. }));
        assert!(matches!(failure("{1}"), ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn eof_stops_the_loop() {
        let mut parser = Parser::new("7");
        let expr = parser.parse_expression(Precedence::Lowest).unwrap();
        assert_eq!(expr.to_string(), "7");
        assert!(parser.current_is(TokenKind::Eof));
    }
}
