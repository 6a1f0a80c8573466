use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        token::{Token, TokenKind},
    },
};

impl Environment {
    /// Evaluates a prefix operation.
    ///
    /// Negation is the only prefix operator the parser produces; any other
    /// operator token is reported as [`RuntimeError::UnknownOperator`].
    pub(crate) fn eval_prefix(&mut self, operator: &Token, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval(operand)?;
        match operator.kind {
            TokenKind::Minus => Ok(-value),
            _ => Err(RuntimeError::UnknownOperator { operator: operator.literal.clone(),
                                                     column:   operator.column(), }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Expr,
        error::RuntimeError,
        interpreter::{
            evaluator::core::Environment,
            token::{Token, TokenKind},
        },
    };

    #[test]
    fn negation() {
        let expr = Expr::Prefix { operator: Token::new(TokenKind::Minus, "-", 0),
                                  operand:  Box::new(Expr::number(4.0)), };
        assert_eq!(Environment::default().eval(&expr), Ok(-4.0));
    }

    #[test]
    fn other_prefix_operators_fail() {
        let expr = Expr::Prefix { operator: Token::new(TokenKind::Plus, "+", 0),
                                  operand:  Box::new(Expr::number(4.0)), };
        assert!(matches!(Environment::default().eval(&expr),
                         Err(RuntimeError::UnknownOperator { .. })));
    }
}
