//! Subcommand handlers for the termweave binary.

pub mod color;
pub mod config;
pub mod text;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use termweave::{Config, Palette};

/// Read a file, or all of stdin when no path is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Palette for command output: plain when `NO_COLOR` is set.
///
/// A forced theme wins; otherwise a configured background color picks the
/// palette directly, and only then is the terminal asked.
pub fn output_palette(config: &Config) -> Palette {
    if config.terminal.no_color {
        return Palette::plain();
    }
    match (config.theme.mode, config.theme.background) {
        (Some(theme), _) => Palette::for_theme(theme),
        (None, Some(background)) => Palette::for_background(background),
        (None, None) => Palette::for_theme(termweave::detect_theme(config)),
    }
}
