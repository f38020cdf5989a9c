//! Terminal interaction.
//!
//! Organized by concern:
//! - tty: preconditions, device access and the raw-mode guard
//! - probe: OSC 10/11 default color queries
//! - theme: dark/light decision from the probed background
//! - window_size: `ESC[18t` column query used by the wrapper

pub mod probe;
pub mod theme;
pub mod tty;
pub mod window_size;

pub use probe::{build_query, ColorProbe, OscColor, ProbeResult, TtyProbe};
pub use theme::{detect_theme, detect_theme_with};
pub use tty::{RawModeGuard, TtyAccess, TtyUnavailable};
pub use window_size::query_columns;
