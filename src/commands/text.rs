//! Text subcommands: wrap, width, strip.

use std::path::Path;

use anyhow::Result;

use termweave::ansi::{strip_escape_sequences, width};
use termweave::wrap::{wrap, WrapConfig};
use termweave::Config;

use super::read_input;

/// Wrap a file or stdin to the resolved width.
pub fn handle_wrap(
    config: &Config,
    width: Option<usize>,
    tab_width: Option<usize>,
    file: Option<&Path>,
) -> Result<()> {
    let mut wrap_config = WrapConfig::from_config(width, config)?;
    if let Some(tab_width) = tab_width {
        wrap_config = wrap_config.with_tab_width(tab_width);
    }
    tracing::debug!(
        width = wrap_config.max_width(),
        tab_width = wrap_config.tab_width(),
        "wrapping"
    );

    let input = read_input(file)?;
    // A trailing newline belongs to the input, not to the last line.
    let body = input.strip_suffix('\n').unwrap_or(&input);
    println!("{}", wrap(body, &wrap_config));
    Ok(())
}

/// Print the visual width of the argument or of stdin.
pub fn handle_width(config: &Config, tab_width: Option<usize>, text: Option<&str>) -> Result<()> {
    let tab_width = tab_width.unwrap_or(config.wrap.tab_width);
    let input = match text {
        Some(text) => text.to_string(),
        None => read_input(None)?,
    };
    let input = input.strip_suffix('\n').unwrap_or(&input);
    println!("{}", width(input, tab_width));
    Ok(())
}

/// Print input with escape sequences removed.
pub fn handle_strip(file: Option<&Path>) -> Result<()> {
    let input = read_input(file)?;
    print!("{}", strip_escape_sequences(&input));
    Ok(())
}
