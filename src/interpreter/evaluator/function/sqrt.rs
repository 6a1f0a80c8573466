/// `sqrt(x)`, the square root. Negative input yields NaN.
#[must_use]
pub fn sqrt(args: &[f64]) -> f64 {
    args[0].sqrt()
}

/// `rootn(x, n)`, the n-th root of `x`, computed as `x^(1/n)`.
///
/// Like the power operator this is not exact for every input, and a negative
/// `x` yields NaN for non-integer `1/n`.
///
/// # Example
/// ```
/// use calcline::interpreter::evaluator::function::sqrt::rootn;
///
/// assert!((rootn(&[16.0, 4.0]) - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn rootn(args: &[f64]) -> f64 {
    args[0].powf(1.0 / args[1])
}
