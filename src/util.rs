/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions between `f64` and `i64` used by the
/// `sum` loop and the `%g`-style formatting used to print results.
pub mod num;
