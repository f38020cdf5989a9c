//! SGR (Select Graphic Rendition) emitters.
//!
//! Produces the true-color sequences used for colored output.
//! Everything emitted here scans back as complete CSI tokens.

use crate::color::Rgb;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Append a true-color foreground sequence (`ESC[38;2;R;G;Bm`) to `buf`.
pub fn push_fg(color: Rgb, buf: &mut String) {
    push_rgb(38, color, buf);
}

/// Append a true-color background sequence (`ESC[48;2;R;G;Bm`) to `buf`.
pub fn push_bg(color: Rgb, buf: &mut String) {
    push_rgb(48, color, buf);
}

/// Foreground sequence for `color`.
pub fn fg(color: Rgb) -> String {
    let mut buf = String::with_capacity(19);
    push_fg(color, &mut buf);
    buf
}

/// Background sequence for `color`.
pub fn bg(color: Rgb) -> String {
    let mut buf = String::with_capacity(19);
    push_bg(color, &mut buf);
    buf
}

/// Wrap `text` in a foreground color followed by a reset.
pub fn paint(text: &str, color: Rgb) -> String {
    let mut buf = String::with_capacity(text.len() + 23);
    push_fg(color, &mut buf);
    buf.push_str(text);
    buf.push_str(RESET);
    buf
}

fn push_rgb(selector: u8, color: Rgb, buf: &mut String) {
    buf.push_str("\x1b[");
    buf.push_str(&selector.to_string());
    buf.push_str(";2;");
    buf.push_str(&color.r.to_string());
    buf.push(';');
    buf.push_str(&color.g.to_string());
    buf.push(';');
    buf.push_str(&color.b.to_string());
    buf.push('m');
}
