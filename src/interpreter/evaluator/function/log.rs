/// `log(x)`, the base 10 logarithm.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::log::log;
///
/// assert_eq!(log(&[1000.0]), 3.0);
/// ```
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    args[0].log10()
}

/// `logn(x, n)`, the logarithm of `x` to base `n`.
///
/// Computed as `ln(x) / ln(n)`. A base of 1 divides by zero and yields an
/// infinity or NaN.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::log::logn;
///
/// assert!((logn(&[8.0, 2.0]) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn logn(args: &[f64]) -> f64 {
    args[0].ln() / args[1].ln()
}
