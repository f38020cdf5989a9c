//! Escape sequence scanner.
//!
//! Splits a string into literal text runs and atomic escape tokens:
//! - CSI: `ESC [` ... final byte in `A-Za-z~@`
//! - OSC: `ESC ]` ... `BEL` or `ESC \`
//! - Other: `ESC` plus one character
//!
//! The scanner never fails. Truncated sequences come out as escape runs
//! flagged incomplete, so callers feeding chunks can carry them forward.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Category of an escape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    /// Control Sequence Introducer (`ESC [`)
    Csi,
    /// Operating System Command (`ESC ]`)
    Osc,
    /// Any other two-character escape
    Other,
}

/// A slice of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRun<'a> {
    /// Printable text (may contain whitespace and newlines)
    Literal(&'a str),
    /// An escape sequence, kept whole
    Escape {
        kind: EscapeKind,
        raw: &'a str,
        /// `false` when input ended before the terminator
        complete: bool,
    },
}

impl<'a> TextRun<'a> {
    /// The exact input text covered by this run.
    pub fn raw(&self) -> &'a str {
        match self {
            TextRun::Literal(text) => text,
            TextRun::Escape { raw, .. } => raw,
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, TextRun::Escape { .. })
    }

    /// True for an escape run cut off by the end of input.
    pub fn is_open(&self) -> bool {
        matches!(self, TextRun::Escape { complete: false, .. })
    }
}

/// Lazy iterator over the runs of a string.
///
/// A clone resumes from the same position. Call [`scan`] again to start
/// over.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

/// Scan `input` into [`TextRun`]s.
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner { input, pos: 0 }
}

impl<'a> Scanner<'a> {
    /// Byte offset of the next run.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn literal(&mut self) -> TextRun<'a> {
        let rest = &self.input[self.pos..];
        let len = rest.find(ESC).unwrap_or(rest.len());
        self.pos += len;
        TextRun::Literal(&rest[..len])
    }

    fn escape(&mut self) -> TextRun<'a> {
        let start = self.pos;
        // Skip the ESC byte itself.
        let body = &self.input[start + 1..];
        let mut chars = body.char_indices();

        let (kind, end, complete) = match chars.next() {
            None => (EscapeKind::Other, start + 1, false),
            Some((_, '[')) => match chars.find(|&(_, c)| is_csi_final(c)) {
                Some((i, c)) => (EscapeKind::Csi, start + 1 + i + c.len_utf8(), true),
                None => (EscapeKind::Csi, self.input.len(), false),
            },
            Some((_, ']')) => match osc_end(&body[1..]) {
                Some(len) => (EscapeKind::Osc, start + 2 + len, true),
                None => (EscapeKind::Osc, self.input.len(), false),
            },
            Some((_, c)) => (EscapeKind::Other, start + 1 + c.len_utf8(), true),
        };

        self.pos = end;
        TextRun::Escape {
            kind,
            raw: &self.input[start..end],
            complete,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = TextRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        if self.input[self.pos..].starts_with(ESC) {
            Some(self.escape())
        } else {
            Some(self.literal())
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

fn is_csi_final(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '~' || c == '@'
}

/// Length of an OSC payload including its terminator, if terminated.
fn osc_end(payload: &str) -> Option<usize> {
    let bytes = payload.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == BEL as u8 {
            return Some(i + 1);
        }
        if b == ESC as u8 && bytes.get(i + 1) == Some(&b'\\') {
            return Some(i + 2);
        }
    }
    None
}

/// Remove every escape run, keeping literal text untouched.
pub fn strip_escape_sequences(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for run in scan(input) {
        if let TextRun::Literal(text) = run {
            out.push_str(text);
        }
    }
    out
}

/// Whether `input` starts with an escape sequence introducer.
pub fn is_escape_start(input: &str) -> bool {
    input.starts_with(ESC)
}

/// Whether `input` ends in the middle of an escape sequence.
pub fn ends_in_open_escape(input: &str) -> bool {
    scan(input).last().is_some_and(|run| run.is_open())
}

/// Split off an unterminated trailing escape.
///
/// Returns `(complete, pending)`. A streaming caller renders `complete` and
/// prepends `pending` to the next chunk, so a sequence cut by a chunk
/// boundary is never printed in halves.
pub fn split_open_tail(input: &str) -> (&str, &str) {
    let mut scanner = scan(input);
    let mut start = 0;
    while let Some(run) = scanner.next() {
        if run.is_open() {
            return input.split_at(start);
        }
        start = scanner.position();
    }
    (input, "")
}
