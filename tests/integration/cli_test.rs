//! Integration tests for the termweave CLI

use predicates::prelude::*;

use crate::helpers::{termweave, write_config};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn no_args_prints_help_and_fails() {
    let (mut cmd, _home) = termweave();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_every_subcommand() {
    let (mut cmd, _home) = termweave();
    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in [
        "wrap", "width", "strip", "theme", "probe", "contrast", "palette", "config",
    ] {
        assert!(stdout.contains(name), "help is missing {name}:\n{stdout}");
    }
}

// ============================================================================
// Wrap Tests
// ============================================================================

#[test]
fn wrap_keeps_escapes_attached_to_words() {
    let (mut cmd, _home) = termweave();
    cmd.args(["wrap", "--width", "20"])
        .write_stdin("The quick brown fox \x1b[1mjumps\x1b[0m over the lazy dog\n")
        .assert()
        .success()
        .stdout("The quick brown fox\n\x1b[1mjumps\x1b[0m over the lazy\ndog\n");
}

#[test]
fn wrap_trailing_blank_adds_no_empty_line() {
    let (mut cmd, _home) = termweave();
    cmd.args(["wrap", "-w", "19"])
        .write_stdin("The quick brown fox \n")
        .assert()
        .success()
        .stdout("The quick brown fox\n");
}

#[test]
fn wrap_reads_file_argument() {
    let (mut cmd, home) = termweave();
    let path = home.path().join("input.txt");
    std::fs::write(&path, "aaa bbb ccc\n").unwrap();

    cmd.args(["wrap", "--width", "7"])
        .arg(&path)
        .assert()
        .success()
        .stdout("aaa bbb\nccc\n");
}

#[test]
fn wrap_uses_columns_env_without_width_flag() {
    let (mut cmd, _home) = termweave();
    cmd.arg("wrap")
        .env("COLUMNS", "10")
        .write_stdin("aaa bbb ccc")
        .assert()
        .success()
        .stdout("aaa bbb\nccc\n");
}

#[test]
fn wrap_width_flag_beats_columns_env() {
    let (mut cmd, _home) = termweave();
    cmd.args(["wrap", "--width", "3"])
        .env("COLUMNS", "80")
        .write_stdin("aaa bbb")
        .assert()
        .success()
        .stdout("aaa\nbbb\n");
}

#[test]
fn wrap_falls_back_to_75_columns() {
    let line = "word ".repeat(20);
    let (mut cmd, _home) = termweave();
    let assert = cmd.arg("wrap").write_stdin(line.trim_end()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let first = stdout.lines().next().unwrap();
    // 15 words of 4 plus 14 separators
    assert_eq!(first.len(), 74);
}

#[test]
fn wrap_rejects_zero_width() {
    let (mut cmd, _home) = termweave();
    cmd.args(["wrap", "--width", "0"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("width"));
}

#[test]
fn wrap_rejects_zero_columns_env() {
    let (mut cmd, _home) = termweave();
    cmd.arg("wrap")
        .env("COLUMNS", "0")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COLUMNS"));
}

#[test]
fn wrap_rejects_garbage_columns_env() {
    let (mut cmd, _home) = termweave();
    cmd.arg("wrap")
        .env("COLUMNS", "wide")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COLUMNS"));
}

#[test]
fn wrap_reads_columns_from_config_file() {
    let (mut cmd, home) = termweave();
    write_config(&home, "[wrap]\ncolumns = 5\n");
    cmd.arg("wrap")
        .write_stdin("aa bb cc")
        .assert()
        .success()
        .stdout("aa bb\ncc\n");
}

#[test]
fn malformed_config_file_is_reported() {
    let (mut cmd, home) = termweave();
    write_config(&home, "[wrap\ncolumns = ");
    cmd.arg("wrap")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

// ============================================================================
// Width and Strip Tests
// ============================================================================

#[test]
fn width_ignores_escape_sequences() {
    let (mut cmd, _home) = termweave();
    cmd.args(["width", "\x1b[31mred\x1b[0m"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn width_honors_tab_width_flag() {
    let (mut cmd, _home) = termweave();
    cmd.args(["width", "--tab-width", "8", "a\tb"])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn width_honors_tab_width_env() {
    let (mut cmd, _home) = termweave();
    cmd.args(["width", "a\tb"])
        .env("TERMWEAVE_TAB_WIDTH", "2")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn width_reads_stdin() {
    let (mut cmd, _home) = termweave();
    cmd.arg("width")
        .write_stdin("\x1b]0;title\x07hello\n")
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn strip_removes_all_escapes() {
    let (mut cmd, _home) = termweave();
    cmd.arg("strip")
        .write_stdin("\x1b[1;32mok\x1b[0m \x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\\n")
        .assert()
        .success()
        .stdout("ok link\n");
}

// ============================================================================
// Color Tests
// ============================================================================

#[test]
fn contrast_white_on_black_is_maximal() {
    let (mut cmd, _home) = termweave();
    cmd.args(["contrast", "255,255,255", "0,0,0"])
        .assert()
        .success()
        .stdout("2225\n");
}

#[test]
fn contrast_same_color_is_100() {
    let (mut cmd, _home) = termweave();
    cmd.args(["contrast", "40,80,120", "40,80,120"])
        .assert()
        .success()
        .stdout("100\n");
}

#[test]
fn contrast_rejects_bad_color() {
    let (mut cmd, _home) = termweave();
    cmd.args(["contrast", "255,255", "0,0,0"]).assert().failure();
}

#[test]
fn theme_defaults_to_dark_without_terminal() {
    let (mut cmd, _home) = termweave();
    cmd.arg("theme").assert().success().stdout("dark\n");
}

#[test]
fn theme_follows_background_override() {
    let (mut cmd, _home) = termweave();
    cmd.arg("theme")
        .env("TERMWEAVE_BG_RGB", "250 250 250")
        .assert()
        .success()
        .stdout("light\n");

    let (mut cmd, _home) = termweave();
    cmd.arg("theme")
        .env("TERMWEAVE_BG_RGB", "10 10 10")
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn theme_env_beats_background_override() {
    let (mut cmd, _home) = termweave();
    cmd.arg("theme")
        .env("TERMWEAVE_THEME", "light")
        .env("TERMWEAVE_BG_RGB", "0 0 0")
        .assert()
        .success()
        .stdout("light\n");
}

#[test]
fn theme_rejects_unknown_mode() {
    let (mut cmd, _home) = termweave();
    cmd.arg("theme")
        .env("TERMWEAVE_THEME", "sepia")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TERMWEAVE_THEME"));
}

#[test]
fn probe_in_ci_is_unavailable() {
    let (mut cmd, _home) = termweave();
    cmd.arg("probe")
        .assert()
        .code(1)
        .stdout("unavailable\n");
}

#[test]
fn probe_reports_configured_colors() {
    let (mut cmd, _home) = termweave();
    cmd.arg("probe")
        .env("TERMWEAVE_BG_RGB", "10,20,30")
        .assert()
        .success()
        .stdout("10 20 30\n");

    let (mut cmd, _home) = termweave();
    cmd.args(["probe", "--foreground"])
        .env("TERMWEAVE_FG_RGB", "200 201 202")
        .assert()
        .success()
        .stdout("200 201 202\n");
}

#[test]
fn palette_without_color_has_no_escapes() {
    let (mut cmd, _home) = termweave();
    let assert = cmd.arg("palette").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains('\x1b'), "unexpected escape in:\n{stdout}");
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("accent"));
}

#[test]
fn palette_follows_configured_background() {
    let (mut cmd, _home) = termweave();
    let assert = cmd
        .arg("palette")
        .env_remove("NO_COLOR")
        .env("TERMWEAVE_BG_RGB", "250 250 240")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    // Light accent swatch
    assert!(stdout.contains("\x1b[38;2;0;135;75m"), "{stdout:?}");
}

#[test]
fn probe_colors_its_output_unless_no_color() {
    let (mut cmd, _home) = termweave();
    let assert = cmd
        .arg("probe")
        .env_remove("NO_COLOR")
        .env("TERMWEAVE_BG_RGB", "10 20 30")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("\x1b[38;2;"), "{stdout:?}");
    assert!(stdout.contains("10 20 30"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_shows_effective_values() {
    let (mut cmd, home) = termweave();
    write_config(&home, "[terminal]\ntimeout_ms = 250\n");
    cmd.arg("config")
        .env("COLUMNS", "42")
        .assert()
        .success()
        .stdout(predicate::str::contains("columns = 42"))
        .stdout(predicate::str::contains("timeout_ms = 250"));
}
