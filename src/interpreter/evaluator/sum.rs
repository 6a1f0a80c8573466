use log::debug;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Environment, EvalResult},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Environment {
    /// Evaluates `sum(start, end, body)`.
    ///
    /// `start` and `end` are evaluated once and truncated toward zero. The
    /// index then runs from `start` to `end` inclusive, ascending only; when
    /// `start > end` the body is never evaluated and the sum is `0`.
    ///
    /// Before each evaluation of `body` the index is written to `i`, so any
    /// expression nested in the body, including another `sum`, sees it. The
    /// value `i` had before the loop is restored once the loop ends, whether
    /// it completes or fails, which lets an enclosing `sum` keep reading its
    /// own index after an inner one returns.
    ///
    /// # Errors
    /// Propagates the first error raised by the bounds or the body.
    ///
    /// # Example
    /// ```
    /// use calcline::{interpreter::evaluator::core::Environment, parse};
    ///
    /// // 1*1 + 2*2 + 3*3
    /// let expr = parse("sum(1, 3, i * i)").unwrap();
    /// assert_eq!(Environment::default().eval(&expr).unwrap(), 14.0);
    /// ```
    pub(crate) fn eval_sum(&mut self, start: &Expr, end: &Expr, body: &Expr) -> EvalResult<f64> {
        let start = f64_to_i64_truncated(self.eval(start)?);
        let end = f64_to_i64_truncated(self.eval(end)?);
        debug!("sum over {start}..={end}");

        let outer_index = self.i;
        let total: EvalResult<f64> = (start..=end).try_fold(0.0, |total, index| {
                                     self.i = i64_to_f64(index);
                                     Ok(total + self.eval(body)?)
                                 });
        self.i = outer_index;
        total
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::evaluator::core::{Environment, EvalResult},
        parse,
    };

    fn eval(input: &str, env: &mut Environment) -> EvalResult<f64> {
        env.eval(&parse(input).unwrap())
    }

    #[test]
    fn inclusive_ascending_range() {
        let mut env = Environment::default();
        assert_eq!(eval("sum(1, 5, i)", &mut env), Ok(15.0));
        assert_eq!(eval("sum(3, 3, i)", &mut env), Ok(3.0));
        assert_eq!(eval("sum(-2, 2, i)", &mut env), Ok(0.0));
        assert_eq!(eval("sum(1, 4, 2)", &mut env), Ok(8.0));
    }

    #[test]
    fn empty_range_is_zero() {
        let mut env = Environment::default();
        assert_eq!(eval("sum(5, 1, i)", &mut env), Ok(0.0));
        assert_eq!(eval("sum(5, 1, foo)", &mut env), Ok(0.0));
    }

    #[test]
    fn bounds_are_truncated() {
        let mut env = Environment::default();
        assert_eq!(eval("sum(1.9, 3.9, i)", &mut env), Ok(6.0));
        assert_eq!(eval("sum(-1.5, 1, i)", &mut env), Ok(0.0));
    }

    #[test]
    fn nested_sums_see_their_own_index() {
        let mut env = Environment::default();
        // (1+2+3) * 1 + (1+2+3) * 2
        assert_eq!(eval("sum(1, 2, sum(1, 3, i) * i)", &mut env), Ok(18.0));
        // inner sum runs before the outer index is read
        assert_eq!(eval("sum(1, 2, sum(1, 3, i) + i)", &mut env), Ok(15.0));
        // inner range depends on the outer index: 1 + (1+2) + (1+2+3)
        assert_eq!(eval("sum(1, 3, sum(1, i, i))", &mut env), Ok(10.0));
    }

    #[test]
    fn index_is_restored_afterwards() {
        let mut env = Environment { ans: 0.0,
                                    i:   42.0, };
        assert_eq!(eval("sum(1, 3, i)", &mut env), Ok(6.0));
        assert!((env.i - 42.0).abs() < f64::EPSILON);

        assert!(matches!(eval("sum(1, 3, i + foo)", &mut env),
                         Err(RuntimeError::UnknownIdentifier { .. })));
        assert!((env.i - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds_may_use_the_outer_index() {
        let mut env = Environment::default();
        assert_eq!(eval("sum(1, 2, sum(i, 2, 1))", &mut env), Ok(3.0));
    }
}
