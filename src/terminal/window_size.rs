//! Window size query (`ESC[18t` -> `ESC[8;rows;colst`).

use super::tty::TtyAccess;

/// Request the text area size in characters.
pub const WINDOW_SIZE_QUERY: &[u8] = b"\x1b[18t";

/// Parse `ESC[8;rows;colst` anywhere in `reply` into `(rows, cols)`.
pub fn parse_window_size_reply(reply: &[u8]) -> Option<(usize, usize)> {
    let text = String::from_utf8_lossy(reply);
    let start = text.find("\x1b[8;")? + "\x1b[8;".len();
    let rest = &text[start..];
    let end = rest.find('t')?;
    let (rows, cols) = rest[..end].split_once(';')?;
    let rows = rows.parse().ok()?;
    let cols = cols.parse().ok()?;
    Some((rows, cols))
}

/// Ask the terminal for its column count.
///
/// `None` when the terminal is unreachable, silent, or answers with
/// something unusable (including zero columns).
pub fn query_columns(access: &TtyAccess) -> Option<usize> {
    let reply = match access.query(WINDOW_SIZE_QUERY, |r| r.contains(&b't')) {
        Ok(reply) => reply,
        Err(reason) => {
            tracing::debug!(%reason, "window size query unavailable");
            return None;
        }
    };
    let (_, cols) = parse_window_size_reply(&reply)?;
    (cols > 0).then_some(cols)
}
