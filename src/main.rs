use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use calcline::repl::{
    config::{MAX_LINE_LENGTH, Mode, PROMPT, ReplConfig},
    session::{LineOutcome, Session},
};
use clap::Parser;
use log::{debug, error};
use rustyline::{DefaultEditor, error::ReadlineError};

/// calcline is an interactive single-line calculator with constants, built-in
/// functions and summation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What to do with each line: evaluate it, dump its tokens or reprint its
    /// syntax tree.
    #[arg(short, long, value_enum, default_value_t = Mode::Calculate)]
    mode: Mode,

    /// Lines longer than this many bytes are truncated.
    #[arg(short = 'l', long, default_value_t = MAX_LINE_LENGTH)]
    max_line_length: usize,

    /// Process this single line and exit instead of starting a session.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = ReplConfig { mode:            args.mode,
                              max_line_length: args.max_line_length, };
    let mut session = Session::new(config);

    let result = match args.expression {
        Some(line) => run_once(&mut session, &line),
        None if io::stdin().is_terminal() => run_interactive(&mut session),
        None => session.run(io::stdin().lock(), io::stdout().lock(), false)
                       .map(|()| ExitCode::SUCCESS)
                       .map_err(|e| e.to_string()),
    };

    result.unwrap_or_else(|e| {
              eprintln!("{e}");
              ExitCode::FAILURE
          })
}

fn run_once(session: &mut Session, line: &str) -> Result<ExitCode, String> {
    let outcome = session.process_line(line, &mut io::stdout().lock())
                         .map_err(|e| e.to_string())?;

    Ok(match outcome {
        LineOutcome::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn run_interactive(session: &mut Session) -> Result<ExitCode, String> {
    let mut editor = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut stdout = io::stdout();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty()
                   && let Err(e) = editor.add_history_entry(line.as_str())
                {
                    debug!("history not updated: {e}");
                }

                let outcome = session.process_line(&line, &mut stdout)
                                     .map_err(|e| e.to_string())?;
                if outcome == LineOutcome::Exit {
                    break;
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Exiting...");
                break;
            },
            Err(e) => {
                error!("failed to read line: {e}");
                return Err(e.to_string());
            },
        }
    }

    Ok(ExitCode::SUCCESS)
}
