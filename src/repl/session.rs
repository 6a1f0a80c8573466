use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::{
    interpreter::{evaluator::core::Environment, lexer::Lexer},
    parse,
    repl::config::{EXIT_COMMAND, Mode, PROMPT, ReplConfig},
    util::num::{RESULT_SIGNIFICANT_DIGITS, format_general},
};

/// What happened to a processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was handled successfully.
    Done,
    /// The line was empty and ignored.
    Skipped,
    /// Parsing or evaluation failed; the error was written to the output.
    Failed,
    /// The line asked to end the session.
    Exit,
}

/// An interactive calculator session.
///
/// The session owns the `ans` slot: it starts at `0`, and every successful
/// evaluation in [`Mode::Calculate`] replaces it. Failed lines leave it
/// untouched.
///
/// ## Example
/// ```
/// use calcline::repl::{config::ReplConfig, session::Session};
///
/// let mut session = Session::new(ReplConfig::default());
/// let mut out = Vec::new();
///
/// session.process_line("6 * 7", &mut out).unwrap();
/// session.process_line("ans + 1", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n43\n");
/// ```
#[derive(Debug)]
pub struct Session {
    config: ReplConfig,
    ans:    f64,
}

impl Session {
    /// Creates a session with `ans = 0`.
    #[must_use]
    pub const fn new(config: ReplConfig) -> Self {
        Self { config, ans: 0.0 }
    }

    /// The result of the last successful evaluation.
    #[must_use]
    pub const fn ans(&self) -> f64 {
        self.ans
    }

    /// The session settings.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Processes one input line and writes its output.
    ///
    /// The line is cut to the configured maximum length first. A line
    /// starting with `exit` ends the session, blank lines are skipped, and
    /// anything else is handled according to the mode.
    ///
    /// # Errors
    /// Only I/O errors from `out` are returned; calculator errors are written
    /// to `out` and reported as [`LineOutcome::Failed`].
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<LineOutcome> {
        let line = bounded_line(line, self.config.max_line_length);

        if line.starts_with(EXIT_COMMAND) {
            writeln!(out, "Exiting...")?;
            return Ok(LineOutcome::Exit);
        }
        if line.trim().is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        match self.config.mode {
            Mode::Calculate => self.calculate(line, out),
            Mode::Tokens => dump_tokens(line, out),
            Mode::Ast => reprint(line, out),
        }
    }

    /// Processes every line from `input` until end of input or `exit`.
    ///
    /// When `show_prompt` is set the prompt is written before each read.
    ///
    /// # Errors
    /// Returns I/O errors from reading `input` or writing `out`.
    pub fn run<R: BufRead, W: Write>(&mut self,
                                     mut input: R,
                                     mut out: W,
                                     show_prompt: bool)
                                     -> io::Result<()> {
        let mut line = String::new();
        loop {
            if show_prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            if self.process_line(&line, &mut out)? == LineOutcome::Exit {
                return Ok(());
            }
        }
    }

    fn calculate<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<LineOutcome> {
        let expr = match parse(line) {
            Ok(expr) => expr,
            Err(e) => {
                writeln!(out, "Invalid calculator input. {e}")?;
                return Ok(LineOutcome::Failed);
            },
        };

        let mut env = Environment::new(self.ans);
        match env.eval(&expr) {
            Ok(value) => {
                self.ans = value;
                writeln!(out, "{}", format_general(value, RESULT_SIGNIFICANT_DIGITS))?;
                Ok(LineOutcome::Done)
            },
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(LineOutcome::Failed)
            },
        }
    }
}

/// Writes every token of `line` in `{ Type: KIND, Literal: 'text' }` form.
fn dump_tokens<W: Write>(line: &str, out: &mut W) -> io::Result<LineOutcome> {
    for token in Lexer::new(line) {
        writeln!(out, "{token}")?;
    }
    Ok(LineOutcome::Done)
}

/// Writes the canonical form of `line`, or `Illegal input.`.
fn reprint<W: Write>(line: &str, out: &mut W) -> io::Result<LineOutcome> {
    match parse(line) {
        Ok(expr) => {
            writeln!(out, "{expr}")?;
            Ok(LineOutcome::Done)
        },
        Err(e) => {
            debug!("reprint failed: {e}");
            writeln!(out, "Illegal input.")?;
            Ok(LineOutcome::Failed)
        },
    }
}

/// Strips the line terminator and cuts the line to at most `max_length`
/// bytes, backing off to a character boundary.
fn bounded_line(line: &str, max_length: usize) -> &str {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.len() <= max_length {
        return line;
    }

    let mut end = max_length;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    warn!("input longer than {max_length} bytes, ignoring '{}'", &line[end..]);
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_lines() {
        assert_eq!(bounded_line("1 + 2\n", 100), "1 + 2");
        assert_eq!(bounded_line("1 + 2\r\n", 100), "1 + 2");
        assert_eq!(bounded_line("123456", 4), "1234");
        assert_eq!(bounded_line("12é", 3), "12");
    }

    #[test]
    fn ans_starts_at_zero() {
        let session = Session::new(ReplConfig::default());
        assert!(session.ans().abs() < f64::EPSILON);
        assert_eq!(session.config().mode, Mode::Calculate);
    }
}
