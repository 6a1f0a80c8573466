use ::log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            function::{builtin, log, sqrt},
            keyword::{KeywordKind, lookup_keyword},
        },
        token::Token,
    },
};

/// Type alias for built-in function handlers.
///
/// A built-in receives its already evaluated arguments. The argument count
/// has been checked against the keyword table before the call.
type BuiltinFn = fn(&[f64]) -> f64;

/// Looks up the implementation of a callable keyword that takes evaluated
/// arguments.
///
/// `sum` is not listed: it evaluates its body itself.
fn builtin_for(kind: KeywordKind) -> Option<BuiltinFn> {
    let func: BuiltinFn = match kind {
        KeywordKind::Sqrt => sqrt::sqrt,
        KeywordKind::Rootn => sqrt::rootn,
        KeywordKind::Log => log::log,
        KeywordKind::Logn => log::logn,
        KeywordKind::Ln => builtin::ln,
        KeywordKind::E => builtin::exp,
        KeywordKind::Sin => builtin::sin,
        KeywordKind::Cos => builtin::cos,
        KeywordKind::Tan => builtin::tan,
        KeywordKind::Asin => builtin::asin,
        KeywordKind::Acos => builtin::acos,
        KeywordKind::Atan => builtin::atan,
        KeywordKind::Sum | KeywordKind::Pi | KeywordKind::Ans | KeywordKind::I => return None,
    };
    Some(func)
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The callee must be an identifier naming a callable keyword, and the
    /// number of arguments must match the keyword's arity. Arguments are
    /// evaluated left to right before the built-in runs; `sum` receives its
    /// arguments unevaluated.
    ///
    /// # Errors
    /// - `InvalidCallTarget` if the callee is not an identifier.
    /// - `UnknownFunction` if the name is not a keyword.
    /// - `NotAFunction` if the keyword is a pure constant.
    /// - `ArgumentCountMismatch` if the arity does not match.
    /// - Propagates errors from the arguments.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            lparen: &Token)
                            -> EvalResult<f64> {
        let Expr::Identifier { name, token } = callee else {
            return Err(RuntimeError::InvalidCallTarget { callee: callee.to_string(),
                                                         column: lparen.column(), });
        };

        let keyword =
            lookup_keyword(name).ok_or_else(|| RuntimeError::UnknownFunction { name:   name.clone(),
                                                                               column: token.column(), })?;

        if !keyword.kind.is_callable() {
            return Err(RuntimeError::NotAFunction { name:   name.clone(),
                                                    column: token.column(), });
        }

        if arguments.len() != keyword.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:     keyword.name.to_string(),
                                                             expected: keyword.arity,
                                                             found:    arguments.len(),
                                                             column:   token.column(), });
        }

        debug!("calling {}/{}", keyword.name, keyword.arity);

        if let [start, end, body] = arguments
           && keyword.kind == KeywordKind::Sum
        {
            return self.eval_sum(start, end, body);
        }

        let Some(func) = builtin_for(keyword.kind) else {
            return Err(RuntimeError::NotAFunction { name:   name.clone(),
                                                    column: token.column(), });
        };

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<f64>>>()?;
        Ok(func(&values))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::evaluator::core::{Environment, EvalResult},
        parse,
    };

    fn eval(input: &str) -> EvalResult<f64> {
        Environment::default().eval(&parse(input).unwrap())
    }

    #[test]
    fn arity_mismatch_names_the_function() {
        assert_eq!(eval("sqrt(1, 2)"),
                   Err(RuntimeError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                             expected: 1,
                                                             found:    2,
                                                             column:   1, }));
        assert!(matches!(eval("sum(1, 2)"),
                         Err(RuntimeError::ArgumentCountMismatch { expected: 3, found: 2, .. })));
        assert!(matches!(eval("ln()"),
                         Err(RuntimeError::ArgumentCountMismatch { expected: 1, found: 0, .. })));
    }

    #[test]
    fn unknown_functions() {
        assert_eq!(eval("foo(1)"),
                   Err(RuntimeError::UnknownFunction { name:   "foo".to_string(),
                                                       column: 1, }));
    }

    #[test]
    fn constants_cannot_be_called() {
        assert!(matches!(eval("pi()"), Err(RuntimeError::NotAFunction { .. })));
        assert!(matches!(eval("ans(2)"), Err(RuntimeError::NotAFunction { .. })));
        assert!(matches!(eval("i()"), Err(RuntimeError::NotAFunction { .. })));
    }

    #[test]
    fn only_identifiers_can_be_called() {
        assert_eq!(eval("2(3)"),
                   Err(RuntimeError::InvalidCallTarget { callee: "2".to_string(),
                                                         column: 2, }));
        assert!(matches!(eval("(1 + 2)(3)"), Err(RuntimeError::InvalidCallTarget { .. })));
    }

    #[test]
    fn arguments_are_checked_before_evaluation() {
        assert!(matches!(eval("sqrt(foo, 2)"),
                         Err(RuntimeError::ArgumentCountMismatch { .. })));
        assert!(matches!(eval("sqrt(foo)"), Err(RuntimeError::UnknownIdentifier { .. })));
    }

    #[test]
    fn e_as_a_function() {
        let value = eval("e(2)").unwrap();
        assert!((value - std::f64::consts::E.powi(2)).abs() < 1e-12);
    }
}
