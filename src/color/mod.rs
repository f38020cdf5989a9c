//! Color model: RGB values, luminance and contrast.
//!
//! All arithmetic is integer-only. Luminance uses the ITU-R BT.709 weights
//! scaled by 10 000; contrast follows the WCAG ratio with the `+0.05` term
//! approximated as `+12` on the 0-255 scale.

pub mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use palette::Palette;

/// Luminance below which a background counts as dark.
pub const DARK_THRESHOLD: u8 = 128;

/// Errors from parsing color values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("expected 3 color components (\"R G B\"), found {found}")]
    WrongComponentCount { found: usize },

    #[error("invalid color component '{value}': expected an integer 0-255")]
    InvalidComponent { value: String },
}

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness, 0-255.
    pub fn luminance(self) -> u8 {
        luminance(self)
    }

    /// Whether this color reads as a dark background.
    pub fn is_dark(self) -> bool {
        luminance(self) < DARK_THRESHOLD
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgb_triplet(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Light or dark terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(other.to_string()),
        }
    }
}

/// BT.709 luminance of `color` on a 0-255 scale.
pub fn luminance(color: Rgb) -> u8 {
    let weighted =
        2126 * u32::from(color.r) + 7152 * u32::from(color.g) + 722 * u32::from(color.b);
    // Weights sum to 10 000, so the quotient never exceeds 255.
    (weighted / 10_000) as u8
}

/// Contrast ratio between two colors, scaled by 100.
///
/// Symmetric in its arguments; `100` means identical luminance.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> u32 {
    let (la, lb) = (u32::from(luminance(a)), u32::from(luminance(b)));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 12) * 100) / (darker + 12)
}

/// Candidate with the highest contrast against `background`.
///
/// Ties keep the earlier candidate. Returns `None` for an empty slice.
pub fn pick_readable(background: Rgb, candidates: &[Rgb]) -> Option<Rgb> {
    candidates.iter().copied().fold(None, |best, c| match best {
        Some(b) if contrast_ratio(background, b) >= contrast_ratio(background, c) => Some(b),
        _ => Some(c),
    })
}

/// Parse a decimal `"R G B"` triplet such as `"10 10 10"`.
///
/// Components may be separated by spaces, tabs or commas.
pub fn parse_rgb_triplet(s: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(ColorError::WrongComponentCount { found: parts.len() });
    }
    let component = |value: &str| {
        value
            .parse::<u8>()
            .map_err(|_| ColorError::InvalidComponent {
                value: value.to_string(),
            })
    };
    Ok(Rgb::new(
        component(parts[0])?,
        component(parts[1])?,
        component(parts[2])?,
    ))
}

/// Extract the color from an OSC 10/11 reply.
///
/// Looks for `rgb:R/G/B` anywhere in `reply`; each channel has 1-4 hex
/// digits and is reduced to its most significant byte.
pub fn parse_osc_reply(reply: &[u8]) -> Option<Rgb> {
    let text = String::from_utf8_lossy(reply);
    let start = text.find("rgb:")? + "rgb:".len();
    let channels_text = &text[start..];
    let end = channels_text
        .find(|c: char| !(c.is_ascii_hexdigit() || c == '/'))
        .unwrap_or(channels_text.len());

    let mut channels = channels_text[..end].split('/');
    let r = parse_hex_channel(channels.next()?)?;
    let g = parse_hex_channel(channels.next()?)?;
    let b = parse_hex_channel(channels.next()?)?;
    if channels.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

fn parse_hex_channel(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.len() > 4 {
        return None;
    }
    let value = u16::from_str_radix(digits, 16).ok()?;
    let scaled = match digits.len() {
        1 => value * 17,
        2 => value,
        3 => value >> 4,
        _ => value >> 8,
    };
    u8::try_from(scaled).ok()
}
