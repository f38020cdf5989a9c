//! Shared helpers for integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the test runner.
const SCRUBBED_ENV: &[&str] = &[
    "COLUMNS",
    "TERMWEAVE_TAB_WIDTH",
    "TERMWEAVE_THEME",
    "TERMWEAVE_FG_RGB",
    "TERMWEAVE_BG_RGB",
    "TERMWEAVE_LOG",
    "TMUX",
];

/// A `termweave` command isolated from the user's config and terminal.
///
/// `CI` is set so no test ever touches the controlling terminal. The
/// returned `TempDir` holds the config home and must outlive the command.
pub fn termweave() -> (Command, TempDir) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::cargo_bin("termweave").expect("binary should build");
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env("CI", "1");
    (cmd, home)
}

/// Write `content` to `<home>/termweave/config.toml`.
pub fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join("termweave");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
}
