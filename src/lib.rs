//! # calcline
//!
//! calcline is an interactive single-line calculator written in Rust.
//! It tokenizes, parses with a precedence-climbing (Pratt) parser, and
//! evaluates arithmetic expressions with constants, built-in functions and a
//! `sum` aggregation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, ParseError},
    interpreter::{evaluator::core::Environment, parser::core::Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an input line as a
/// tree. The tree is built by the parser, printed by the parse-and-reprint
/// mode and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per expression construct.
/// - Keeps the source token of every node for diagnostics.
/// - Prints trees in canonical fully parenthesized form.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating a line, each carrying the column it refers to.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// This module contains the token model, the lexer, the Pratt parser and the
/// evaluator.
pub mod interpreter;
/// The interactive driver.
///
/// Reads lines, applies the configured mode, keeps the previous answer and
/// formats output.
///
/// # Responsibilities
/// - Bounds the input line length and detects `exit`.
/// - Runs the calculator, token dump or parse-and-reprint mode.
/// - Prints results with eight significant digits.
pub mod repl;
/// General utilities for numeric conversion and formatting.
///
/// # Responsibilities
/// - Truncate `f64` loop bounds to integers.
/// - Format results like C's `%g`.
pub mod util;

/// Parses one line into a syntax tree.
///
/// The whole line must form a single expression.
///
/// # Errors
/// Returns the first syntax error found.
///
/// # Examples
/// ```
/// use calcline::parse;
///
/// let expr = parse("-2 ^ 2").unwrap();
/// assert_eq!(expr.to_string(), "((-2) ^ 2)");
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Expr, ParseError> {
    Parser::new(source).parse_program()
}

/// Parses and evaluates one line.
///
/// `ans` is the value the `ans` identifier evaluates to, normally the result
/// of the previous line.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use calcline::get_result;
///
/// assert_eq!(get_result("1 + 2 * 3", 0.0).unwrap(), 7.0);
/// assert_eq!(get_result("ans / 2", 10.0).unwrap(), 5.0);
///
/// // 'foo' is not a known name.
/// assert!(get_result("foo + 1", 0.0).is_err());
/// ```
pub fn get_result(source: &str, ans: f64) -> Result<f64, CalcError> {
    let expr = parse(source)?;
    let mut env = Environment::new(ans);
    Ok(env.eval(&expr)?)
}
