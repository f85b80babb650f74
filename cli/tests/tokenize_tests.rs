use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn loxlex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_loxlex"));
    cmd.env_remove("LOXLEX_LOG");
    cmd
}

fn tokenize_source(source: &str) -> Output {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(source.as_bytes()).expect("write temp file");
    loxlex()
        .arg("tokenize")
        .arg(file.path())
        .output()
        .expect("run loxlex")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn tokenize_empty_file() {
    let output = tokenize_source("");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "EOF  null\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn tokenize_operators() {
    let output = tokenize_source("({<=})\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "LEFT_PAREN ( null\n\
         LEFT_BRACE { null\n\
         LESS_EQUAL <= null\n\
         RIGHT_BRACE } null\n\
         RIGHT_PAREN ) null\n\
         EOF  null\n"
    );
}

#[test]
fn tokenize_unexpected_characters_exit_65() {
    let output = tokenize_source(",$\n(#");
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        stdout(&output),
        "COMMA , null\nLEFT_PAREN ( null\nEOF  null\n"
    );
    assert_eq!(
        stderr(&output),
        "[line 1] Error: Unexpected character: $\n\
         [line 2] Error: Unexpected character: #\n"
    );
}

#[test]
fn tokenize_missing_file_exits_1() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = loxlex()
        .arg("tokenize")
        .arg(dir.path().join("missing.lox"))
        .output()
        .expect("run loxlex");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("could not read"));
}

#[test]
fn missing_arguments_exit_1() {
    let output = loxlex().output().expect("run loxlex");
    assert_eq!(output.status.code(), Some(1));

    let output = loxlex().arg("tokenize").output().expect("run loxlex");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_command_exits_1() {
    let output = loxlex()
        .args(["parse", "file.lox"])
        .output()
        .expect("run loxlex");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_0() {
    let output = loxlex().arg("--help").output().expect("run loxlex");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("tokenize"));
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"()").expect("write temp file");
    let output = loxlex()
        .args(["--log-level", "debug", "tokenize"])
        .arg(file.path())
        .output()
        .expect("run loxlex");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "LEFT_PAREN ( null\nRIGHT_PAREN ) null\nEOF  null\n"
    );
    assert!(stderr(&output).contains("scan finished"));
}

#[test]
fn invalid_log_filter_is_a_usage_error() {
    let output = loxlex()
        .args(["--log-level", "loxlex=bogus", "tokenize", "x.lox"])
        .output()
        .expect("run loxlex");
    assert_eq!(output.status.code(), Some(1));
}
