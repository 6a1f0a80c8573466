use clap::ValueEnum;

/// Longest line, in bytes, that is processed. Longer input is truncated.
pub const MAX_LINE_LENGTH: usize = 100;
/// Printed before each line is read interactively.
pub const PROMPT: &str = ">> ";
/// Lines starting with this text end the session.
pub const EXIT_COMMAND: &str = "exit";

/// What the driver does with each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Evaluate the line and print the result.
    #[default]
    #[value(alias = "calc")]
    Calculate,
    /// Print every token of the line.
    Tokens,
    /// Print the parsed tree in fully parenthesized form.
    Ast,
}

/// Settings for a [`crate::repl::session::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplConfig {
    /// The run mode.
    pub mode:            Mode,
    /// Longest line, in bytes, that is processed.
    pub max_line_length: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { mode:            Mode::default(),
               max_line_length: MAX_LINE_LENGTH, }
    }
}

impl ReplConfig {
    /// Default settings running in `mode`.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }
}
