//! Escape-sequence aware text primitives.
//!
//! - [`scanner`]: split text into literal runs and escape tokens
//! - [`width`]: visual column width built on the scanner
//! - [`sgr`]: true-color and attribute sequences for colored output

pub mod scanner;
pub mod sgr;
pub mod width;

pub use scanner::{
    ends_in_open_escape, is_escape_start, scan, split_open_tail, strip_escape_sequences,
    EscapeKind, Scanner, TextRun,
};
pub use width::{width, width_default, DEFAULT_TAB_WIDTH};
