//! Integration tests for the ansi-image command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{bin, temp_gradient, write_rgba};

const PROMPT: &str = "WARNING no width specified. Use image width";
const CANCELLED: &str = "Exiting without printing image...";

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn image_with_width_renders_scaled_rows() {
    let (_dir, path) = temp_gradient(8, 6);

    let output = bin("ansi-image")
        .args(["-w", "4"])
        .arg(&path)
        .output()
        .expect("run ansi-image");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains(PROMPT));

    // 6 * 4 / 8 = 3 rows of 4 cells
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.matches("\x1b[48;2;").count(), 4);
    }
    assert!(stdout.ends_with("\x1b[0m\n"));
}

#[test]
fn image_file_flag_takes_precedence() {
    let (_dir, path) = temp_gradient(2, 2);

    bin("ansi-image")
        .args(["-w", "2", "--file"])
        .arg(&path)
        .arg("does-not-exist.png")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[48;2;0;0;99m  \x1b[0m"));
}

// ============================================================================
// Width Confirmation
// ============================================================================

#[test]
fn image_without_width_accepts_yes() {
    let (_dir, path) = temp_gradient(3, 2);

    bin("ansi-image")
        .arg(&path)
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} 3? (y/n): ", PROMPT)))
        .stdout(predicate::str::contains("\x1b[48;2;20;10;99m  \x1b[0m\n"));
}

#[test]
fn image_without_width_reprompts_then_cancels() {
    let (_dir, path) = temp_gradient(3, 2);

    bin("ansi-image")
        .arg(&path)
        .write_stdin("what\nn\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please enter \"y\" or \"n\": "))
        .stdout(predicate::str::contains(CANCELLED))
        .stdout(predicate::str::contains("\x1b[48;2;").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn image_without_width_and_closed_stdin_cancels() {
    let (_dir, path) = temp_gradient(3, 2);

    bin("ansi-image")
        .arg(&path)
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(CANCELLED));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn image_with_alpha_channel_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_rgba(dir.path(), "alpha.png");

    bin("ansi-image")
        .args(["-w", "2"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("3 channels"));
}

#[test]
fn image_missing_file_reports_path() {
    bin("ansi-image")
        .args(["-w", "10", "/nonexistent/picture.png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load image"))
        .stderr(predicate::str::contains("/nonexistent/picture.png"));
}

#[test]
fn image_without_any_path_is_an_error() {
    bin("ansi-image")
        .args(["-w", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No image file given"));
}

#[test]
fn image_zero_width_is_a_usage_error() {
    let (_dir, path) = temp_gradient(2, 2);

    bin("ansi-image")
        .args(["-w", "0"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn image_help_explains_width() {
    bin("ansi-image")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width <WIDTH>"))
        .stdout(predicate::str::contains("--file <PATH>"));
}
