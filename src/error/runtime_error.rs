#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are one-based columns into the input line.
pub enum RuntimeError {
    /// A bare identifier that is neither a constant nor an environment slot.
    UnknownIdentifier {
        /// The name of the identifier.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// An operator token the evaluator has no meaning for.
    UnknownOperator {
        /// The operator text.
        operator: String,
        /// The column where the error occurred.
        column:   usize,
    },
    /// Something other than a name was called, as in `2(3)`.
    InvalidCallTarget {
        /// The printed callee.
        callee: String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Called a name that is not a keyword.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Called a keyword that only has a constant meaning, such as `pi()`.
    NotAFunction {
        /// The name of the keyword.
        name:   String,
        /// The column where the error occurred.
        column: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity of the function.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The column where the error occurred.
        column:   usize,
    },
}

impl RuntimeError {
    /// The one-based column the error refers to.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnknownIdentifier { column, .. }
            | Self::UnknownOperator { column, .. }
            | Self::InvalidCallTarget { column, .. }
            | Self::UnknownFunction { column, .. }
            | Self::NotAFunction { column, .. }
            | Self::ArgumentCountMismatch { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, column } => {
                write!(f, "Error at column {column}: Unknown identifier '{name}'.")
            },
            Self::UnknownOperator { operator, column } => {
                write!(f, "Error at column {column}: Unknown operator '{operator}'.")
            },
            Self::InvalidCallTarget { callee, column } => {
                write!(f, "Error at column {column}: '{callee}' cannot be called.")
            },
            Self::UnknownFunction { name, column } => {
                write!(f, "Error at column {column}: Unknown function '{name}'.")
            },
            Self::NotAFunction { name, column } => {
                write!(f, "Error at column {column}: '{name}' is a constant, not a function.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          column, } => write!(f,
                                                              "Error at column {column}: Invalid number of arguments in {name} call: expected {expected}, found {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
