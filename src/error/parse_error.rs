#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are one-based columns into the input line.
pub enum ParseError {
    /// A character that does not start any token.
    IllegalCharacter {
        /// The offending character.
        character: String,
        /// The column where the error occurred.
        column:    usize,
    },
    /// Found a token that cannot start an expression.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// The column where the error occurred.
        column: usize,
    },
    /// A token with a binding precedence has no infix meaning.
    UnexpectedOperator {
        /// The operator encountered.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Numeric text without a valid numeric prefix, such as `.` or `..5`.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The column where the error occurred.
        column:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column where the error occurred.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// The one-based column the error refers to.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::IllegalCharacter { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column }
            | Self::UnexpectedOperator { column, .. }
            | Self::InvalidNumber { column, .. }
            | Self::ExpectedClosingParen { column }
            | Self::UnexpectedTrailingTokens { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, column } => {
                write!(f, "Error at column {column}: Illegal character '{character}'.")
            },
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },
            Self::UnexpectedOperator { token, column } => {
                write!(f, "Error at column {column}: '{token}' cannot continue an expression.")
            },
            Self::InvalidNumber { literal, column } => {
                write!(f, "Error at column {column}: Invalid number literal '{literal}'.")
            },
            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),
            Self::UnexpectedTrailingTokens { token, column } => write!(f,
                                                                       "Error at column {column}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
