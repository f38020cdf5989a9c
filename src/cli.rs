//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::Rgb;

#[derive(Debug, Parser)]
#[command(name = "termweave")]
#[command(version)]
#[command(about = "Terminal-aware text wrapping, width measurement and color probing")]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Word-wrap text without splitting escape sequences
    Wrap {
        /// Target width in columns (default: $COLUMNS, then the terminal, then 75)
        #[arg(short, long)]
        width: Option<usize>,

        /// Columns per tab character
        #[arg(short, long)]
        tab_width: Option<usize>,

        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the visual width of text, ignoring escape sequences
    Width {
        /// Columns per tab character
        #[arg(short, long)]
        tab_width: Option<usize>,

        /// Text to measure (reads stdin when omitted)
        text: Option<String>,
    },

    /// Remove escape sequences, keeping the visible text
    Strip {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the detected theme (dark or light)
    Theme,

    /// Ask the terminal for its default colors
    Probe {
        /// Query the foreground (OSC 10) instead of the background (OSC 11)
        #[arg(long)]
        foreground: bool,
    },

    /// Print the contrast ratio of two colors (x100)
    Contrast {
        /// First color as R,G,B
        #[arg(value_parser = parse_rgb_arg)]
        first: Rgb,

        /// Second color as R,G,B
        #[arg(value_parser = parse_rgb_arg)]
        second: Rgb,
    },

    /// Show the output palette for the detected theme
    Palette,

    /// Print the effective configuration as TOML
    Config,
}

fn parse_rgb_arg(value: &str) -> Result<Rgb, String> {
    value.parse::<Rgb>().map_err(|e| e.to_string())
}
