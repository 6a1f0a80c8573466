/// The parser state, the precedence-climbing loop and the dispatch tables.
///
/// Holds the [`core::Parser`] type that pulls tokens from the lexer on demand
/// and the two lookup tables mapping a token kind to its prefix or infix
/// handler.
pub mod core;

/// Prefix handlers.
///
/// Handles tokens that begin an expression: numbers, identifiers, unary
/// negation and parenthesized groups.
pub mod unary;

/// Infix handlers.
///
/// Handles tokens that continue an expression: the binary arithmetic
/// operators and function call argument lists.
pub mod binary;

/// Shared parser helpers.
///
/// Comma separated argument lists, closing parenthesis checks and numeric
/// literal conversion.
pub mod utils;
