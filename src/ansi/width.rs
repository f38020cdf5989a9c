//! Visual width of terminal text.
//!
//! Escape runs take no columns. Every other code point takes one column,
//! double-width glyphs included; a tab takes `tab_width` columns.

use super::scanner::{scan, TextRun};

/// Tab width used when the caller has no preference.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Number of columns `input` occupies when printed.
pub fn width(input: &str, tab_width: usize) -> usize {
    scan(input)
        .map(|run| match run {
            TextRun::Literal(text) => literal_width(text, tab_width),
            TextRun::Escape { .. } => 0,
        })
        .sum()
}

/// [`width`] with [`DEFAULT_TAB_WIDTH`].
pub fn width_default(input: &str) -> usize {
    width(input, DEFAULT_TAB_WIDTH)
}

/// Columns taken by a single literal character.
pub(crate) fn char_width(c: char, tab_width: usize) -> usize {
    if c == '\t' {
        tab_width
    } else {
        1
    }
}

fn literal_width(text: &str, tab_width: usize) -> usize {
    text.chars().map(|c| char_width(c, tab_width)).sum()
}
