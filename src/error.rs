/// Parsing errors.
///
/// Defines all error types that can occur while turning a line into a syntax
/// tree. Illegal characters, missing operands, malformed numbers, unbalanced
/// parentheses and leftover input are all reported here.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a syntax
/// tree: unknown names, calls to things that are not functions and argument
/// count mismatches.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while processing a single input line.
///
/// Both phases convert into this type, so `?` can be used across parsing and
/// evaluation.
#[derive(Debug)]
pub enum CalcError {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The line parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
