/// Call resolution and dispatch.
///
/// Resolves the callee against the keyword table, checks the argument count
/// and routes the call to its implementation.
pub mod core;
/// Single-argument built-in functions.
///
/// `e(x)`, `ln` and the trigonometric functions.
pub mod builtin;
/// Logarithm function implementations.
///
/// Base 10 and base n.
pub mod log;
/// Root function implementations.
///
/// Square root and n-th root.
pub mod sqrt;
