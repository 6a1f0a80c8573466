/// Driver configuration.
///
/// The run mode, the maximum line length and the prompt.
pub mod config;
/// Line-by-line processing.
///
/// The [`session::Session`] keeps the previous answer between lines and writes
/// the output of each mode.
pub mod session;
