use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        token::{Token, TokenKind},
    },
};

impl Environment {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one; both must succeed
    /// before the operator is applied.
    pub(crate) fn eval_infix(&mut self,
                             operator: &Token,
                             left: &Expr,
                             right: &Expr)
                             -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        apply_binary(operator, left, right)
    }
}

/// Applies a binary operator to two values.
///
/// `+ - * /` follow IEEE-754, so division by zero yields an infinity or NaN
/// rather than an error. `^` uses [`f64::powf`].
///
/// # Errors
/// `UnknownOperator` for any operator token other than the five above.
///
/// # Example
/// ```
/// use calcline::interpreter::{
///     evaluator::binary::apply_binary,
///     token::{Token, TokenKind},
/// };
///
/// let caret = Token::new(TokenKind::Caret, "^", 0);
/// assert_eq!(apply_binary(&caret, 2.0, 10.0).unwrap(), 1024.0);
/// ```
pub fn apply_binary(operator: &Token, left: f64, right: f64) -> EvalResult<f64> {
    match operator.kind {
        TokenKind::Plus => Ok(left + right),
        TokenKind::Minus => Ok(left - right),
        TokenKind::Asterisk => Ok(left * right),
        TokenKind::Slash => Ok(left / right),
        TokenKind::Caret => Ok(left.powf(right)),
        _ => Err(RuntimeError::UnknownOperator { operator: operator.literal.clone(),
                                                 column:   operator.column(), }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal, 3)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(apply_binary(&op(TokenKind::Plus, "+"), 1.5, 2.0), Ok(3.5));
        assert_eq!(apply_binary(&op(TokenKind::Minus, "-"), 1.5, 2.0), Ok(-0.5));
        assert_eq!(apply_binary(&op(TokenKind::Asterisk, "*"), 1.5, 2.0), Ok(3.0));
        assert_eq!(apply_binary(&op(TokenKind::Slash, "/"), 1.5, 2.0), Ok(0.75));
        assert_eq!(apply_binary(&op(TokenKind::Caret, "^"), 2.0, 3.0), Ok(8.0));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let slash = op(TokenKind::Slash, "/");
        assert_eq!(apply_binary(&slash, 1.0, 0.0), Ok(f64::INFINITY));
        assert!(apply_binary(&slash, 0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn unknown_operator() {
        assert_eq!(apply_binary(&op(TokenKind::Comma, ","), 1.0, 2.0),
                   Err(RuntimeError::UnknownOperator { operator: ",".to_string(),
                                                       column:   4, }));
    }

    #[test]
    fn evaluates_both_sides_first() {
        let expr = Expr::infix(op(TokenKind::Comma, ","),
                               Expr::number(1.0),
                               Expr::identifier("nope"));
        assert!(matches!(Environment::default().eval(&expr),
                         Err(RuntimeError::UnknownIdentifier { .. })));
    }
}
