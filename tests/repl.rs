use std::io::Cursor;

use calcline::repl::{
    config::{Mode, ReplConfig},
    session::{LineOutcome, Session},
};

fn run_session(config: ReplConfig, input: &str) -> (Session, String) {
    let mut session = Session::new(config);
    let mut out = Vec::new();

    session.run(Cursor::new(input), &mut out, false)
           .expect("writing to a Vec never fails");

    (session, String::from_utf8(out).expect("output is UTF-8"))
}

fn calculate(input: &str) -> String {
    run_session(ReplConfig::default(), input).1
}

#[test]
fn prints_results_with_eight_significant_digits() {
    assert_eq!(calculate("1+2*3\npi\n2^0.5\n"), "7\n3.1415927\n1.4142136\n");
    assert_eq!(calculate("10^20\n1/3\n"), "1e+20\n0.33333333\n");
}

#[test]
fn ans_carries_between_lines() {
    let (session, out) = run_session(ReplConfig::default(), "ans\n6 * 7\nans + 1\nans / 2\n");

    assert_eq!(out, "0\n42\n43\n21.5\n");
    assert!((session.ans() - 21.5).abs() < f64::EPSILON);
}

#[test]
fn failed_lines_keep_ans() {
    let (session, out) = run_session(ReplConfig::default(), "5\nfoo\n(1 +\nans\n");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "5");
    assert!(lines[1].contains("Unknown identifier 'foo'"));
    assert!(lines[2].starts_with("Invalid calculator input."));
    assert_eq!(lines[3], "5");
    assert!((session.ans() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn exit_stops_the_session() {
    let out = calculate("1\nexit\n2\n");
    assert_eq!(out, "1\nExiting...\n");

    let out = calculate("exit now\n3\n");
    assert_eq!(out, "Exiting...\n");
}

#[test]
fn end_of_input_stops_the_session() {
    assert_eq!(calculate("1 + 1"), "2\n");
    assert_eq!(calculate(""), "");
}

#[test]
fn blank_lines_are_skipped() {
    let mut session = Session::new(ReplConfig::default());
    let mut out = Vec::new();

    assert_eq!(session.process_line("   \n", &mut out).unwrap(), LineOutcome::Skipped);
    assert_eq!(session.process_line("", &mut out).unwrap(), LineOutcome::Skipped);
    assert!(out.is_empty());
}

#[test]
fn line_outcomes() {
    let mut session = Session::new(ReplConfig::default());
    let mut out = Vec::new();

    assert_eq!(session.process_line("2 + 2", &mut out).unwrap(), LineOutcome::Done);
    assert_eq!(session.process_line("sqrt(1, 2)", &mut out).unwrap(), LineOutcome::Failed);
    assert_eq!(session.process_line("1 +", &mut out).unwrap(), LineOutcome::Failed);
    assert_eq!(session.process_line("exit", &mut out).unwrap(), LineOutcome::Exit);
}

#[test]
fn long_lines_are_truncated() {
    let config = ReplConfig { max_line_length: 5,
                              ..ReplConfig::default() };

    // Only "12+34" is read.
    let (_, out) = run_session(config, "12+345678\n");
    assert_eq!(out, "46\n");
}

#[test]
fn token_mode_dumps_every_token() {
    let (_, out) = run_session(ReplConfig::with_mode(Mode::Tokens), "sqrt(2) @\n");

    assert_eq!(out,
               "{ Type: IDENT, Literal: 'sqrt' }\n\
                { Type: LPAREN, Literal: '(' }\n\
                { Type: NUMBER, Literal: '2' }\n\
                { Type: RPAREN, Literal: ')' }\n\
                { Type: ILLEGAL, Literal: '@' }\n");
}

#[test]
fn ast_mode_reprints_trees() {
    let (session, out) = run_session(ReplConfig::with_mode(Mode::Ast),
                                     "1 + 2 * 3\n-x ^ 2\nsum(1, 3, i)\n(1 + 2\n");

    assert_eq!(out, "(1 + (2 * 3))\n((-x) ^ 2)\nsum(1, 3, i)\nIllegal input.\n");
    assert!(session.ans().abs() < f64::EPSILON);
}

#[test]
fn prompt_is_written_before_each_read() {
    let mut session = Session::new(ReplConfig::default());
    let mut out = Vec::new();

    session.run(Cursor::new("1\n"), &mut out, true).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ">> 1\n>> ");
}
