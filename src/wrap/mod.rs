//! Word wrapping for text that may contain escape sequences.
//!
//! # Algorithm
//!
//! Walk the scanner's runs, growing the current line and remembering the
//! last space or tab in it:
//! - escape runs are appended whole and never break a line
//! - when the line grows past the width and a boundary exists, the line is
//!   cut there: the part before is emitted with trailing blanks trimmed,
//!   the blank itself is dropped, and the rest starts the next line
//! - a word with no boundary before it is never split, even if too wide
//! - `\n` flushes the current line as-is
//!
//! Column counting follows [`crate::ansi::width`]: one column per code
//! point, tabs expand to the tab width.

mod error;

pub use error::WrapError;

use crate::ansi::scanner::{scan, TextRun};
use crate::ansi::width::{char_width, width};
use crate::ansi::DEFAULT_TAB_WIDTH;
use crate::config::Config;
use crate::terminal::tty::TtyAccess;
use crate::terminal::window_size::query_columns;

/// Width used when neither configuration nor the terminal provides one.
pub const FALLBACK_WIDTH: usize = 75;

/// Wrap parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConfig {
    max_width: usize,
    tab_width: usize,
}

impl WrapConfig {
    /// Wrap at `max_width` columns with the default tab width.
    ///
    /// # Errors
    /// [`WrapError::InvalidWidth`] when `max_width` is 0.
    pub fn new(max_width: usize) -> Result<Self, WrapError> {
        if max_width == 0 {
            return Err(WrapError::InvalidWidth { width: max_width });
        }
        Ok(Self {
            max_width,
            tab_width: DEFAULT_TAB_WIDTH,
        })
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Resolve the width from `explicit`, configuration, or the terminal.
    pub fn from_config(explicit: Option<usize>, config: &Config) -> Result<Self, WrapError> {
        let width = resolve_width(explicit, config)?;
        Ok(Self::new(width)?.with_tab_width(config.wrap.tab_width))
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }
}

/// Pick the wrap width.
///
/// Order: `explicit`, then the configured column count (`COLUMNS`), then a
/// window-size query to the terminal, then [`FALLBACK_WIDTH`].
pub fn resolve_width(explicit: Option<usize>, config: &Config) -> Result<usize, WrapError> {
    resolve_width_with(explicit, config, || {
        query_columns(&TtyAccess::from_config(config))
    })
}

/// [`resolve_width`] with a custom terminal query.
pub fn resolve_width_with<Q>(
    explicit: Option<usize>,
    config: &Config,
    query: Q,
) -> Result<usize, WrapError>
where
    Q: FnOnce() -> Option<usize>,
{
    if let Some(width) = explicit.or(config.wrap.columns) {
        if width == 0 {
            return Err(WrapError::InvalidWidth { width });
        }
        return Ok(width);
    }
    match query() {
        Some(width) if width > 0 => Ok(width),
        _ => {
            tracing::debug!(width = FALLBACK_WIDTH, "using fallback wrap width");
            Ok(FALLBACK_WIDTH)
        }
    }
}

/// Wrap `input`, returning newline-joined lines.
pub fn wrap(input: &str, config: &WrapConfig) -> String {
    wrap_lines(input, config).join("\n")
}

/// Wrap `input` into separate lines.
pub fn wrap_lines(input: &str, config: &WrapConfig) -> Vec<String> {
    let mut lines = Vec::new();
    wrap_into(input, config, &mut lines);
    lines
}

/// Wrap `input`, appending the lines to `out`.
pub fn wrap_into(input: &str, config: &WrapConfig, out: &mut Vec<String>) {
    let mut line = LineState::default();

    for run in scan(input) {
        match run {
            TextRun::Escape { raw, .. } => {
                line.text.push_str(raw);
                line.broke = false;
            }
            TextRun::Literal(text) => {
                for c in text.chars() {
                    if c == '\n' {
                        out.push(std::mem::take(&mut line).text);
                        continue;
                    }
                    line.push(c, config.tab_width);
                    if line.width > config.max_width {
                        line.break_at_boundary(config.tab_width, out);
                    }
                }
            }
        }
    }

    // Nothing left over from a break at the very end.
    if !(line.broke && line.text.is_empty()) {
        out.push(line.text);
    }
}

fn is_break_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Drop blanks at the end of `head`, looking through trailing escapes.
///
/// Escape runs are kept whole, even when their second character is a blank.
fn trim_trailing_blanks(head: &str) -> String {
    let runs: Vec<TextRun<'_>> = scan(head).collect();
    let mut keep = vec![""; runs.len()];
    let mut trimming = true;
    for (i, run) in runs.iter().enumerate().rev() {
        keep[i] = match run {
            TextRun::Literal(text) if trimming => {
                let trimmed = text.trim_end_matches(is_break_space);
                trimming = trimmed.is_empty();
                trimmed
            }
            _ => run.raw(),
        };
    }
    keep.concat()
}

/// Last break opportunity in the current line.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    /// Byte offset of the blank
    at: usize,
    /// Byte length of the blank
    len: usize,
    /// Line width before the blank
    width_before: usize,
    /// Width of the blank itself
    blank_width: usize,
}

#[derive(Debug, Default)]
struct LineState {
    text: String,
    width: usize,
    boundary: Option<Boundary>,
    /// A line was emitted by a break and nothing has been added since
    broke: bool,
}

impl LineState {
    fn push(&mut self, c: char, tab_width: usize) {
        let w = char_width(c, tab_width);
        if is_break_space(c) {
            self.boundary = Some(Boundary {
                at: self.text.len(),
                len: c.len_utf8(),
                width_before: self.width,
                blank_width: w,
            });
        }
        self.text.push(c);
        self.width += w;
        self.broke = false;
    }

    /// Cut at the last boundary, if any.
    fn break_at_boundary(&mut self, tab_width: usize, out: &mut Vec<String>) {
        let Some(boundary) = self.boundary.take() else {
            return;
        };

        let rest = self.text.split_off(boundary.at + boundary.len);
        let rest_width = self.width - boundary.width_before - boundary.blank_width;
        self.text.truncate(boundary.at);
        let head = trim_trailing_blanks(&self.text);

        // A head with nothing visible (blanks and escapes only) is not worth
        // a line of its own; its escapes stay in front of the rest.
        if width(&head, tab_width) > 0 {
            out.push(head);
            self.text = rest;
            self.broke = true;
        } else {
            self.text = head + &rest;
        }
        self.width = rest_width;
    }
}
