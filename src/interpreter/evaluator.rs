/// Core evaluation logic.
///
/// Defines the [`core::Environment`] holding the `ans` and `i` slots, the
/// result type, and the dispatch over expression kinds.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation, the only prefix operator.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the five arithmetic operators.
pub mod binary;

/// The keyword table.
///
/// Maps every predefined name to its meaning and arity.
pub mod keyword;

/// Function call evaluation.
///
/// Resolves call targets against the keyword table, checks arity and runs the
/// built-in functions.
pub mod function;

/// The `sum(start, end, body)` aggregation.
///
/// Evaluates a body repeatedly with the loop index bound to `i`.
pub mod sum;
