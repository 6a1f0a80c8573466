use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Precedence, TokenKind},
    },
};

/// Parses a comma-separated argument list terminated by `)`.
///
/// Called right after the opening parenthesis has been consumed. An empty
/// list is allowed. The separating commas and the closing parenthesis are
/// consumed and dropped.
///
/// # Errors
/// - `ExpectedClosingParen` if the list does not end with `)`.
/// - Propagates errors from the argument expressions.
pub(in crate::interpreter::parser) fn parse_call_arguments(parser: &mut Parser<'_>)
                                                           -> ParseResult<Vec<Expr>> {
    let mut arguments = Vec::new();

    if parser.current_is(TokenKind::RParen) {
        parser.advance();
        return Ok(arguments);
    }

    arguments.push(parser.parse_expression(Precedence::Lowest)?);
    while parser.current_is(TokenKind::Comma) {
        parser.advance();
        arguments.push(parser.parse_expression(Precedence::Lowest)?);
    }

    expect_closing_paren(parser)?;
    Ok(arguments)
}

/// Consumes a `)` or fails.
pub(in crate::interpreter::parser) fn expect_closing_paren(parser: &mut Parser<'_>)
                                                           -> ParseResult<()> {
    if !parser.current_is(TokenKind::RParen) {
        return Err(ParseError::ExpectedClosingParen { column: parser.current().column() });
    }
    parser.advance();
    Ok(())
}

/// Converts the longest numeric prefix of `text`.
///
/// The prefix is the leading run of digits containing at most one `.`; it
/// must contain at least one digit. Returns the value and the number of bytes
/// converted.
///
/// ## Example
/// ```
/// use calcline::interpreter::parser::utils::numeric_prefix;
///
/// assert_eq!(numeric_prefix("42"), Some((42.0, 2)));
/// assert_eq!(numeric_prefix("1.5.0"), Some((1.5, 3)));
/// assert_eq!(numeric_prefix("."), None);
/// ```
#[must_use]
pub fn numeric_prefix(text: &str) -> Option<(f64, usize)> {
    let mut seen_dot = false;
    let end = text.find(|c: char| {
                      if c == '.' && !seen_dot {
                          seen_dot = true;
                          false
                      } else {
                          !c.is_ascii_digit()
                      }
                  })
                  .unwrap_or(text.len());

    let prefix = &text[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    prefix.parse().ok().map(|value| (value, end))
}
