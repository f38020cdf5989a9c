//! Dark/light theme detection.

use crate::color::{luminance, Theme, DARK_THRESHOLD};
use crate::config::Config;

use super::probe::{ColorProbe, OscColor, ProbeResult, TtyProbe};

/// Decide the theme using the controlling terminal.
pub fn detect_theme(config: &Config) -> Theme {
    detect_theme_with(config, &TtyProbe::new(config))
}

/// Decide the theme with an explicit probe.
///
/// 1. A configured theme wins outright (the probe is not called).
/// 2. Otherwise the background color is probed.
/// 3. No answer means [`Theme::Dark`].
pub fn detect_theme_with<P: ColorProbe + ?Sized>(config: &Config, probe: &P) -> Theme {
    if let Some(theme) = config.theme.mode {
        tracing::debug!(%theme, "theme set by configuration");
        return theme;
    }

    match probe.probe(OscColor::Background) {
        ProbeResult::Color(rgb) => {
            let lum = luminance(rgb);
            tracing::debug!(%rgb, lum, "terminal background");
            if lum < DARK_THRESHOLD {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        ProbeResult::Unavailable => Theme::Dark,
    }
}
