//! Configuration: an optional TOML file overlaid with environment variables.
//!
//! Resolution order for every setting is default, then file, then
//! environment. Environment access goes through a lookup function so the
//! same code runs against `std::env` in production and a map in tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ansi::DEFAULT_TAB_WIDTH;
use crate::color::{ColorError, Rgb, Theme};

/// Terminal column count (the usual shell variable).
pub const ENV_COLUMNS: &str = "COLUMNS";
pub const ENV_TAB_WIDTH: &str = "TERMWEAVE_TAB_WIDTH";
pub const ENV_THEME: &str = "TERMWEAVE_THEME";
/// `"R G B"` foreground override, skips OSC 10 probing.
pub const ENV_FG_RGB: &str = "TERMWEAVE_FG_RGB";
/// `"R G B"` background override, skips OSC 11 probing.
pub const ENV_BG_RGB: &str = "TERMWEAVE_BG_RGB";
/// Set by CI systems; disables all terminal queries.
pub const ENV_CI: &str = "CI";
/// Set inside tmux; queries need the passthrough envelope.
pub const ENV_TMUX: &str = "TMUX";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

const DEFAULT_DEVICE: &str = "/dev/tty";
const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be at least 1, got {value}")]
    NotPositive { var: &'static str, value: usize },

    #[error("{var}={value:?} is not a theme (expected \"dark\" or \"light\")")]
    InvalidTheme { var: &'static str, value: String },

    #[error("{var} is not a valid color: {source}")]
    InvalidColor {
        var: &'static str,
        #[source]
        source: ColorError,
    },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Word-wrap settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapSection {
    /// Fixed column count; when unset the terminal is asked
    pub columns: Option<usize>,
    pub tab_width: usize,
}

impl Default for WrapSection {
    fn default() -> Self {
        Self {
            columns: None,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Theme selection and color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Forces dark or light, skipping detection
    pub mode: Option<Theme>,
    /// Known foreground color ("R G B")
    pub foreground: Option<Rgb>,
    /// Known background color ("R G B")
    pub background: Option<Rgb>,
}

/// Terminal access settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSection {
    /// Controlling terminal device
    pub device: PathBuf,
    /// Read timeout for terminal replies, in milliseconds
    pub timeout_ms: u64,
    #[serde(skip)]
    pub in_ci: bool,
    #[serde(skip)]
    pub in_tmux: bool,
    #[serde(skip)]
    pub no_color: bool,
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            in_ci: false,
            in_tmux: false,
            no_color: false,
        }
    }
}

/// Effective configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wrap: WrapSection,
    pub theme: ThemeSection,
    pub terminal: TerminalSection,
}

impl Config {
    /// Default location: `<config_dir>/termweave/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termweave").join("config.toml"))
    }

    /// Load from the default file (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from an optional file, then overlay `lookup`.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Defaults overlaid with `lookup`, no file.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load_from(None, lookup)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.wrap.columns == Some(0) {
            return Err(ConfigError::NotPositive {
                var: "wrap.columns",
                value: 0,
            });
        }
        Ok(config)
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_COLUMNS) {
            let columns = parse_number(ENV_COLUMNS, &value)?;
            if columns == 0 {
                return Err(ConfigError::NotPositive {
                    var: ENV_COLUMNS,
                    value: columns,
                });
            }
            self.wrap.columns = Some(columns);
        }
        if let Some(value) = get(ENV_TAB_WIDTH) {
            self.wrap.tab_width = parse_number(ENV_TAB_WIDTH, &value)?;
        }
        if let Some(value) = get(ENV_THEME) {
            let theme = value.parse().map_err(|_| ConfigError::InvalidTheme {
                var: ENV_THEME,
                value: value.clone(),
            })?;
            self.theme.mode = Some(theme);
        }
        if let Some(value) = get(ENV_FG_RGB) {
            self.theme.foreground = Some(parse_color(ENV_FG_RGB, &value)?);
        }
        if let Some(value) = get(ENV_BG_RGB) {
            self.theme.background = Some(parse_color(ENV_BG_RGB, &value)?);
        }

        self.terminal.in_ci = get(ENV_CI).is_some_and(|v| is_truthy(&v));
        self.terminal.in_tmux = get(ENV_TMUX).is_some();
        self.terminal.no_color = get(ENV_NO_COLOR).is_some();
        Ok(())
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

fn parse_color(var: &'static str, value: &str) -> Result<Rgb, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidColor { var, source })
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no")
}
