//! Color subcommands: theme, probe, contrast, palette.

use anyhow::Result;

use termweave::ansi::sgr;
use termweave::terminal::{detect_theme, ColorProbe, OscColor, ProbeResult, TtyProbe};
use termweave::{contrast_ratio, luminance, Config, Rgb};

use super::output_palette;

/// Print `dark` or `light`.
#[cfg(not(tarpaulin_include))]
pub fn handle_theme(config: &Config) -> Result<()> {
    println!("{}", detect_theme(config));
    Ok(())
}

/// Print the probed color as `R G B`, or `unavailable`.
///
/// Returns whether a color was found.
#[cfg(not(tarpaulin_include))]
pub fn handle_probe(config: &Config, foreground: bool) -> Result<bool> {
    let slot = if foreground {
        OscColor::Foreground
    } else {
        OscColor::Background
    };
    let palette = output_palette(config);
    match TtyProbe::new(config).probe(slot) {
        ProbeResult::Color(rgb) => {
            println!("{}", palette.success_text(&rgb.to_string()));
            Ok(true)
        }
        ProbeResult::Unavailable => {
            println!("{}", palette.warning_text("unavailable"));
            Ok(false)
        }
    }
}

/// Print the contrast ratio (x100) between two colors.
pub fn handle_contrast(first: Rgb, second: Rgb) -> Result<()> {
    println!("{}", contrast_ratio(first, second));
    Ok(())
}

/// Show each palette entry as a swatch with its luminance.
#[cfg(not(tarpaulin_include))]
pub fn handle_palette(config: &Config) -> Result<()> {
    let palette = output_palette(config);
    for (name, rgb) in palette.entries() {
        let swatch = if palette.is_colored() {
            sgr::paint("████", rgb)
        } else {
            String::new()
        };
        println!("{:<10} {:<12} lum {:>3} {}", name, rgb.to_string(), luminance(rgb), swatch);
    }
    Ok(())
}
