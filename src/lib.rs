//! termweave - terminal-aware text rendering.
//!
//! Building blocks for printing colorized text to a terminal:
//!
//! - [`ansi`]: escape-sequence scanner, visual width, SGR emitters
//! - [`wrap`]: word wrapping that never splits an escape sequence
//! - [`color`]: RGB values, luminance, contrast and output palettes
//! - [`terminal`]: OSC color probing, theme detection, window size query
//! - [`config`]: TOML file plus environment configuration
//!
//! ```
//! use termweave::wrap::{wrap, WrapConfig};
//!
//! let text = "The quick brown fox \x1b[1mjumps\x1b[0m over the lazy dog";
//! let wrapped = wrap(text, &WrapConfig::new(20).unwrap());
//! assert_eq!(wrapped.lines().count(), 3);
//! ```

pub mod ansi;
pub mod cli;
pub mod color;
pub mod config;
pub mod terminal;
pub mod wrap;

pub use ansi::{strip_escape_sequences, width};
pub use color::{contrast_ratio, luminance, Palette, Rgb, Theme};
pub use config::{Config, ConfigError};
pub use terminal::{detect_theme, ColorProbe, OscColor, ProbeResult, TtyProbe};
pub use wrap::{wrap, WrapConfig, WrapError};
