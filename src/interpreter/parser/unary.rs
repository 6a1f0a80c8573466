use log::warn;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::{expect_closing_paren, numeric_prefix},
        },
        token::{Precedence, Token},
    },
};

/// Parses a numeric literal from a `NUMBER` token.
///
/// The lexer accepts any run of digits and dots, so the text is converted by
/// its longest numeric prefix: `1.2.3` reads as `1.2`. Text without any
/// digit before the second dot, such as `.` or `..5`, is rejected.
///
/// # Errors
/// `InvalidNumber` if the text has no numeric prefix.
pub(crate) fn parse_number_literal(_parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr> {
    let Some((value, consumed)) = numeric_prefix(&token.literal) else {
        let column = token.column();
        return Err(ParseError::InvalidNumber { literal: token.literal,
                                               column });
    };

    if consumed < token.len() {
        warn!("ignoring '{}' after number {value} at column {}",
              &token.literal[consumed..],
              token.column());
    }

    Ok(Expr::NumberLiteral { value, token })
}

/// Parses an identifier.
///
/// Identifiers are not resolved here; the evaluator decides whether a name is
/// a constant, an environment slot or a function.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn parse_identifier(_parser: &mut Parser<'_>, token: Token) -> ParseResult<Expr> {
    Ok(Expr::Identifier { name: token.literal.clone(),
                          token })
}

/// Parses unary negation.
///
/// The operand is parsed at prefix precedence, so `-2^2` negates only the
/// `2` and reads as `(-2)^2`, while `--x` nests.
///
/// Grammar: `power := "-" power | ...`
pub(crate) fn parse_prefix_expression(parser: &mut Parser<'_>,
                                      operator: Token)
                                      -> ParseResult<Expr> {
    let operand = parser.parse_expression(Precedence::Prefix)?;
    Ok(Expr::Prefix { operator,
                      operand: Box::new(operand) })
}

/// Parses a parenthesized group.
///
/// The inner expression starts over at the lowest precedence and must be
/// followed by `)`. The parentheses themselves leave no node behind.
///
/// # Errors
/// `ExpectedClosingParen` if the group is not closed.
pub(crate) fn parse_grouped_expression(parser: &mut Parser<'_>,
                                       _lparen: Token)
                                       -> ParseResult<Expr> {
    let inner = parser.parse_expression(Precedence::Lowest)?;
    expect_closing_paren(parser)?;
    Ok(inner)
}
