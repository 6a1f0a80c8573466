use crate::{
    ast::Expr,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::parse_call_arguments,
        },
        token::Token,
    },
};

/// Parses the right operand of a binary operator.
///
/// The right-hand side is parsed at the operator's own precedence, which
/// stops at the next operator of the same level and makes every binary
/// operator left-associative:
///
/// ```text
///     1 - 2 - 3  =>  ((1 - 2) - 3)
///     2 ^ 3 ^ 2  =>  ((2 ^ 3) ^ 2)
/// ```
///
/// # Parameters
/// - `parser`: Parser positioned after the operator.
/// - `left`: The already parsed left operand.
/// - `operator`: The consumed operator token.
pub(crate) fn parse_infix_expression(parser: &mut Parser<'_>,
                                     left: Expr,
                                     operator: Token)
                                     -> ParseResult<Expr> {
    let precedence = operator.kind.precedence();
    let right = parser.parse_expression(precedence)?;
    Ok(Expr::infix(operator, left, right))
}

/// Parses a call argument list after `(`.
///
/// Whatever was parsed to the left becomes the callee. The parser accepts any
/// callee and any number of arguments; both are checked during evaluation.
///
/// Grammar: `call := callee "(" (expression ("," expression)*)? ")"`
pub(crate) fn parse_call_expression(parser: &mut Parser<'_>,
                                    callee: Expr,
                                    lparen: Token)
                                    -> ParseResult<Expr> {
    let arguments = parse_call_arguments(parser)?;
    Ok(Expr::Call { callee: Box::new(callee),
                    arguments,
                    token: lparen })
}
