//! Built-ins taking a single argument.
//!
//! Trigonometric functions work in radians and follow [`f64`] semantics for
//! out-of-domain input, e.g. `asin(2)` is NaN.

/// `e(x)`, Euler's number raised to `x`.
pub fn exp(args: &[f64]) -> f64 {
    args[0].exp()
}

/// `ln(x)`, the natural logarithm.
pub fn ln(args: &[f64]) -> f64 {
    args[0].ln()
}

pub fn sin(args: &[f64]) -> f64 {
    args[0].sin()
}

pub fn cos(args: &[f64]) -> f64 {
    args[0].cos()
}

pub fn tan(args: &[f64]) -> f64 {
    args[0].tan()
}

pub fn asin(args: &[f64]) -> f64 {
    args[0].asin()
}

pub fn acos(args: &[f64]) -> f64 {
    args[0].acos()
}

pub fn atan(args: &[f64]) -> f64 {
    args[0].atan()
}
