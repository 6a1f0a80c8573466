/// Number of significant digits used when printing results.
pub const RESULT_SIGNIFICANT_DIGITS: usize = 8;

/// Truncates an `f64` toward zero.
///
/// Values outside the `i64` range saturate at its bounds and NaN becomes 0.
///
/// ## Example
/// ```
/// use calcline::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9), -3);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Converts an `i64` to the nearest `f64`.
///
/// Exact for magnitudes up to `2^53`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Formats `value` like C's `%.<precision>g`.
///
/// The value is rounded to `precision` significant digits. Fixed notation is
/// used when the decimal exponent `x` satisfies `-4 <= x < precision`,
/// scientific notation otherwise, and trailing zeros are removed in both
/// cases. A precision of zero is treated as one.
///
/// ## Example
/// ```
/// use calcline::util::num::format_general;
///
/// assert_eq!(format_general(7.0, 8), "7");
/// assert_eq!(format_general(std::f64::consts::PI, 8), "3.1415927");
/// assert_eq!(format_general(1e20, 8), "1e+20");
/// assert_eq!(format_general(0.0001, 8), "0.0001");
/// assert_eq!(format_general(123_456_789.0, 8), "1.2345679e+08");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let significant = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing follows it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
