//! Named output colors for a light or dark terminal.
//!
//! A `Palette` is a plain value built once by the caller; nothing is
//! exported to the process environment and nothing needs tearing down.

use super::{pick_readable, Rgb, Theme};
use crate::ansi::sgr;

/// Output colors tuned for one background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Primary text color
    pub text_primary: Rgb,
    /// Secondary/dimmed text color
    pub text_secondary: Rgb,
    /// Highlights and headings
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    /// When false every helper returns the text unchanged
    colored: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

impl Palette {
    /// Palette for a dark background.
    pub fn dark() -> Self {
        Self {
            text_primary: Rgb::new(220, 220, 220),
            text_secondary: Rgb::new(135, 135, 135),
            accent: Rgb::new(95, 215, 135),
            success: Rgb::new(80, 200, 120),
            warning: Rgb::new(230, 190, 60),
            error: Rgb::new(240, 90, 90),
            colored: true,
        }
    }

    /// Palette for a light background.
    pub fn light() -> Self {
        Self {
            text_primary: Rgb::new(30, 30, 30),
            text_secondary: Rgb::new(105, 105, 105),
            accent: Rgb::new(0, 135, 75),
            success: Rgb::new(0, 130, 60),
            warning: Rgb::new(165, 105, 0),
            error: Rgb::new(190, 30, 30),
            colored: true,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Palette for a known background color.
    ///
    /// Picks the theme from the background's luminance, then chooses the
    /// primary text color with the best contrast against it.
    pub fn for_background(background: Rgb) -> Self {
        let theme = if background.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        let mut palette = Self::for_theme(theme);
        let candidates = [Self::dark().text_primary, Self::light().text_primary];
        if let Some(text) = pick_readable(background, &candidates) {
            palette.text_primary = text;
        }
        palette
    }

    /// Palette that emits no escape sequences.
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::dark()
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(text, self.text_primary)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(text, self.text_secondary)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(text, self.accent)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(text, self.success)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(text, self.warning)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(text, self.error)
    }

    /// Named entries, in display order.
    pub fn entries(&self) -> [(&'static str, Rgb); 6] {
        [
            ("primary", self.text_primary),
            ("secondary", self.text_secondary),
            ("accent", self.accent),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }

    fn paint(&self, text: &str, color: Rgb) -> String {
        if self.colored {
            sgr::paint(text, color)
        } else {
            text.to_string()
        }
    }
}
