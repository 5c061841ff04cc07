//! Integration tests for the ansi-text command

use predicates::prelude::*;

use crate::helpers::bin;

fn run_text(args: &[&str]) -> (String, String, i32) {
    let output = bin("ansi-text").args(args).output().expect("run ansi-text");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn text_palette_foreground_and_rgb_background() {
    let (stdout, stderr, exit_code) =
        run_text(&["-f", "12", "--background", "rgb(4, 5, 6)", "hello", "world"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(
        stdout.escape_debug().to_string(),
        @r"\u{1b}[38;5;012m\u{1b}[48;2;4;5;6mhello world\u{1b}[0m"
    );
}

#[test]
fn text_without_colors_only_resets() {
    bin("ansi-text")
        .arg("plain")
        .assert()
        .success()
        .stdout("plain\x1b[0m");
}

#[test]
fn text_after_double_dash_may_start_with_hyphen() {
    bin("ansi-text")
        .args(["-f", "1", "--", "-x"])
        .assert()
        .success()
        .stdout("\x1b[38;5;001m-x\x1b[0m");
}

#[test]
fn text_unknown_flag_is_printed() {
    let (stdout, stderr, exit_code) = run_text(&["-f", "1", "--bold", "hi"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "\x1b[38;5;001m--bold hi\x1b[0m");
}

#[test]
fn text_negative_number_is_printed() {
    bin("ansi-text")
        .args(["temp", "-5", "deg"])
        .assert()
        .success()
        .stdout("temp -5 deg\x1b[0m");
}

#[test]
fn text_rgb_with_trailing_garbage_is_accepted() {
    bin("ansi-text")
        .args(["-b", "rgb(1,2,3)!!", "x"])
        .assert()
        .success()
        .stdout("\x1b[48;2;1;2;3mx\x1b[0m");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn text_invalid_foreground_exits_2() {
    let (stdout, stderr, exit_code) = run_text(&["-f", "notacolor", "hi"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("Invalid foreground color: notacolor"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn text_invalid_background_names_background() {
    bin("ansi-text")
        .args(["-b", "rgb(1,2)", "hi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid background color: rgb(1,2)"));
}

#[test]
fn text_out_of_range_palette_is_rejected() {
    bin("ansi-text")
        .args(["-f", "256", "hi"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("between 0 and 255"));
}

// ============================================================================
// Help / Version
// ============================================================================

#[test]
fn text_help_lists_color_options() {
    bin("ansi-text")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--foreground <COLOR>"))
        .stdout(predicate::str::contains("--background <COLOR>"))
        .stdout(predicate::str::contains("rgb(1, 2, 3)"));
}

#[test]
fn text_version_shows_package_version() {
    bin("ansi-text")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
