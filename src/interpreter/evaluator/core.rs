use std::f64::consts::{E, PI};

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::keyword::{KeywordKind, lookup_keyword},
        token::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The mutable state visible to an evaluation.
///
/// There are exactly two slots:
/// - `ans` holds the result of the previous top-level evaluation and is only
///   read while a line is evaluated.
/// - `i` holds the index of the innermost running `sum`. It is written only by
///   `sum` and read by the expressions nested inside it.
///
/// An environment is created by the caller for each top-level evaluation and
/// passed by mutable reference through the recursive calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Environment {
    /// Result of the previous top-level evaluation.
    pub ans: f64,
    /// Index of the innermost running `sum`.
    pub i:   f64,
}

impl Environment {
    /// Creates an environment with the given previous answer and `i = 0`.
    #[must_use]
    pub const fn new(ans: f64) -> Self {
        Self { ans, i: 0.0 }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, identifiers, negation,
    /// binary operations and calls.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere in the tree; the
    /// remaining subexpressions are not evaluated.
    ///
    /// # Example
    /// ```
    /// use calcline::{interpreter::evaluator::core::Environment, parse};
    ///
    /// let expr = parse("ans * 2").unwrap();
    /// let mut env = Environment::new(21.0);
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), 42.0);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::NumberLiteral { value, .. } => Ok(*value),
            Expr::Identifier { name, token } => self.eval_identifier(name, token),
            Expr::Prefix { operator, operand } => self.eval_prefix(operator, operand),
            Expr::Infix { operator,
                          left,
                          right, } => self.eval_infix(operator, left, right),
            Expr::Call { callee,
                         arguments,
                         token, } => self.eval_call(callee, arguments, token),
        }
    }

    /// Resolves a bare identifier.
    ///
    /// Only `pi`, `e`, `ans` and `i` have a value. Every other name, including
    /// a function name used without a call, is an error.
    fn eval_identifier(&self, name: &str, token: &Token) -> EvalResult<f64> {
        let value = match lookup_keyword(name).map(|keyword| keyword.kind) {
            Some(KeywordKind::Pi) => PI,
            Some(KeywordKind::E) => E,
            Some(KeywordKind::Ans) => self.ans,
            Some(KeywordKind::I) => self.i,
            _ => {
                return Err(RuntimeError::UnknownIdentifier { name:   name.to_string(),
                                                             column: token.column(), });
            },
        };
        debug!("resolved '{name}' to {value}");
        Ok(value)
    }
}

/// Evaluates `expr` against `env`.
///
/// Convenience wrapper around [`Environment::eval`].
///
/// # Errors
/// Returns the first [`RuntimeError`] raised while evaluating.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<f64> {
    env.eval(expr)
}
