//! Black-box tests for the mygrep binary: stdin in, exit status out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn mygrep() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mygrep"))
}

#[test]
fn match_exits_zero() {
    mygrep()
        .args(["-E", "ca+ts"])
        .write_stdin("caats\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn no_match_exits_one() {
    mygrep()
        .args(["-E", "ca+ts"])
        .write_stdin("cts\n")
        .assert()
        .code(1)
        .stderr("");
}

#[test]
fn trailing_newline_is_not_part_of_line() {
    mygrep()
        .args(["-E", "^abc$"])
        .write_stdin("abc\n")
        .assert()
        .success();
}

#[test]
fn input_without_newline() {
    mygrep()
        .args(["-E", r"\d$"])
        .write_stdin("room 7")
        .assert()
        .success();
}

#[test]
fn pattern_error_exits_two() {
    mygrep()
        .args(["-E", "[abc"])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error: unterminated character group"));
}

#[test]
fn dangling_quantifier_exits_two() {
    mygrep()
        .args(["-E", "+a"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to repeat"));
}

#[test]
fn missing_pattern_exits_two() {
    mygrep().write_stdin("abc\n").assert().code(2);
}

#[test]
fn only_matching_prints_match() {
    mygrep()
        .args(["-o", "-E", r"\d+"])
        .write_stdin("order 1234 shipped\n")
        .assert()
        .success()
        .stdout("1234\n");
}

#[test]
fn only_matching_prints_nothing_on_miss() {
    mygrep()
        .args(["-o", "-E", r"\d+"])
        .write_stdin("no digits\n")
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn help_exits_successfully() {
    mygrep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PATTERN"));
}

#[test]
fn version_exits_successfully() {
    mygrep().arg("--version").assert().success();
}

#[test]
fn unknown_flag_exits_two() {
    mygrep()
        .args(["--bogus", "-E", "a"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn optional_atom_needs_a_character() {
    mygrep()
        .args(["-E", "ca?"])
        .write_stdin("c\n")
        .assert()
        .code(1);
}
