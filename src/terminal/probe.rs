//! Terminal color probing via OSC 10/11.
//!
//! Wire format:
//! - query: `ESC ] <code> ; ? BEL`
//! - inside tmux: `ESC P tmux ; ESC ESC ] <code> ; ? BEL ESC \`
//! - reply: `ESC ] <code> ; rgb:RRRR/GGGG/BBBB` ended by `BEL` or `ESC \`
//!
//! Probing never fails loudly: anything short of a parsed color is
//! [`ProbeResult::Unavailable`].

use crate::color::{parse_osc_reply, Rgb};
use crate::config::Config;

use super::tty::TtyAccess;

const BEL: u8 = 0x07;
const ESC: u8 = 0x1b;

/// Which default color to ask the terminal for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscColor {
    /// OSC 10
    Foreground,
    /// OSC 11
    Background,
}

impl OscColor {
    pub fn code(self) -> u8 {
        match self {
            OscColor::Foreground => 10,
            OscColor::Background => 11,
        }
    }
}

/// Outcome of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    Color(Rgb),
    Unavailable,
}

impl ProbeResult {
    pub fn color(self) -> Option<Rgb> {
        match self {
            ProbeResult::Color(rgb) => Some(rgb),
            ProbeResult::Unavailable => None,
        }
    }
}

/// Source of terminal default colors.
pub trait ColorProbe {
    fn probe(&self, slot: OscColor) -> ProbeResult;
}

/// Build the OSC query for `slot`, wrapped for tmux when `tmux` is set.
pub fn build_query(slot: OscColor, tmux: bool) -> Vec<u8> {
    let query = format!("\x1b]{};?\x07", slot.code()).into_bytes();
    if tmux {
        tmux_passthrough(&query)
    } else {
        query
    }
}

/// Wrap `sequence` in tmux's DCS passthrough envelope.
///
/// Every ESC inside the payload is doubled so tmux forwards it instead of
/// interpreting it.
pub fn tmux_passthrough(sequence: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(sequence.len() * 2 + 10);
    out.extend_from_slice(b"\x1bPtmux;");
    for &byte in sequence {
        if byte == ESC {
            out.push(ESC);
        }
        out.push(byte);
    }
    out.extend_from_slice(b"\x1b\\");
    out
}

/// Whether an OSC reply has reached its terminator.
pub fn reply_is_terminated(reply: &[u8]) -> bool {
    reply.contains(&BEL) || reply.windows(2).any(|w| w == [ESC, b'\\'])
}

/// Probe backed by the controlling terminal.
#[derive(Debug, Clone)]
pub struct TtyProbe {
    access: TtyAccess,
    tmux: bool,
    foreground: Option<Rgb>,
    background: Option<Rgb>,
}

impl TtyProbe {
    pub fn new(config: &Config) -> Self {
        Self::with_access(TtyAccess::from_config(config), config)
    }

    /// Probe with explicit terminal preconditions.
    pub fn with_access(access: TtyAccess, config: &Config) -> Self {
        Self {
            access,
            tmux: config.terminal.in_tmux,
            foreground: config.theme.foreground,
            background: config.theme.background,
        }
    }

    fn override_for(&self, slot: OscColor) -> Option<Rgb> {
        match slot {
            OscColor::Foreground => self.foreground,
            OscColor::Background => self.background,
        }
    }
}

impl ColorProbe for TtyProbe {
    fn probe(&self, slot: OscColor) -> ProbeResult {
        if let Some(rgb) = self.override_for(slot) {
            tracing::debug!(code = slot.code(), %rgb, "using configured color");
            return ProbeResult::Color(rgb);
        }

        let query = build_query(slot, self.tmux);
        let reply = match self.access.query(&query, reply_is_terminated) {
            Ok(reply) => reply,
            Err(reason) => {
                tracing::debug!(code = slot.code(), %reason, "color probe unavailable");
                return ProbeResult::Unavailable;
            }
        };

        match parse_osc_reply(&reply) {
            Some(rgb) => ProbeResult::Color(rgb),
            None => {
                tracing::debug!(
                    code = slot.code(),
                    reply = ?String::from_utf8_lossy(&reply),
                    "unrecognized color reply"
                );
                ProbeResult::Unavailable
            }
        }
    }
}
