//! Direct access to the controlling terminal.
//!
//! Queries follow one pattern: check preconditions, open the device, switch
//! to raw mode with a short read timeout, write a request, collect the reply,
//! restore the original mode. Restoration lives in [`RawModeGuard`]'s `Drop`
//! so it runs on every exit path.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;

/// Replies longer than this are truncated.
pub const REPLY_CAPACITY: usize = 128;

/// Why a terminal query was skipped or failed.
#[derive(Debug)]
pub enum TtyUnavailable {
    /// stdin or stdout is not a terminal
    NotInteractive,
    /// Running under CI
    Ci,
    /// Device could not be opened or configured
    Device(io::Error),
    /// Terminal did not answer before the timeout
    NoReply,
}

impl fmt::Display for TtyUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInteractive => write!(f, "stdin/stdout is not a terminal"),
            Self::Ci => write!(f, "running under CI"),
            Self::Device(e) => write!(f, "terminal device unavailable: {}", e),
            Self::NoReply => write!(f, "terminal did not reply"),
        }
    }
}

/// Preconditions and parameters for talking to the terminal.
#[derive(Debug, Clone)]
pub struct TtyAccess {
    /// Both stdin and stdout are terminals
    pub interactive: bool,
    pub in_ci: bool,
    pub device: PathBuf,
    pub timeout: Duration,
}

impl TtyAccess {
    /// Build from configuration, checking the standard streams.
    pub fn from_config(config: &Config) -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout),
            in_ci: config.terminal.in_ci,
            device: config.terminal.device.clone(),
            timeout: Duration::from_millis(config.terminal.timeout_ms),
        }
    }

    /// Check preconditions and open the device.
    ///
    /// The cheap checks run first so a redirected or CI process returns
    /// without touching the device.
    pub fn open(&self) -> Result<Tty, TtyUnavailable> {
        if !self.interactive {
            return Err(TtyUnavailable::NotInteractive);
        }
        if self.in_ci {
            return Err(TtyUnavailable::Ci);
        }
        let file = File::options()
            .read(true)
            .write(true)
            .open(&self.device)
            .map_err(TtyUnavailable::Device)?;
        Ok(Tty {
            file,
            timeout: self.timeout,
        })
    }

    /// Send `request` and return the reply.
    ///
    /// `is_complete` is called after each read; returning true stops reading
    /// before the timeout.
    pub fn query<F>(&self, request: &[u8], is_complete: F) -> Result<Vec<u8>, TtyUnavailable>
    where
        F: Fn(&[u8]) -> bool,
    {
        let mut tty = self.open()?;
        let reply = tty
            .exchange(request, is_complete)
            .map_err(TtyUnavailable::Device)?;
        if reply.is_empty() {
            return Err(TtyUnavailable::NoReply);
        }
        tracing::trace!(reply = ?String::from_utf8_lossy(&reply), "terminal reply");
        Ok(reply)
    }
}

/// An open controlling terminal.
#[derive(Debug)]
pub struct Tty {
    file: File,
    timeout: Duration,
}

impl Tty {
    /// Write `request` and read until `is_complete`, a timeout, or a full buffer.
    pub fn exchange<F>(&mut self, request: &[u8], is_complete: F) -> io::Result<Vec<u8>>
    where
        F: Fn(&[u8]) -> bool,
    {
        let _guard = RawModeGuard::enter(&self.file, self.timeout)?;

        self.file.write_all(request)?;
        self.file.flush()?;

        let mut reply = Vec::with_capacity(REPLY_CAPACITY);
        let mut buf = [0u8; REPLY_CAPACITY];
        while reply.len() < REPLY_CAPACITY {
            let room = REPLY_CAPACITY - reply.len();
            let n = match self.file.read(&mut buf[..room]) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            // Zero bytes means the read timer expired.
            if n == 0 {
                tracing::debug!(received = reply.len(), "terminal read timed out");
                break;
            }
            reply.extend_from_slice(&buf[..n]);
            if is_complete(&reply) {
                break;
            }
        }
        Ok(reply)
    }
}

/// Convert a timeout to termios `VTIME` units (tenths of a second, 1-255).
pub fn timeout_deciseconds(timeout: Duration) -> u8 {
    let tenths = (timeout.as_millis() + 99) / 100;
    tenths.clamp(1, 255) as u8
}

#[cfg(unix)]
pub use unix::RawModeGuard;

#[cfg(not(unix))]
pub use fallback::RawModeGuard;

#[cfg(unix)]
mod unix {
    use std::fs::File;
    use std::io;
    use std::mem::MaybeUninit;
    use std::os::unix::io::{AsRawFd, RawFd};
    use std::time::Duration;

    use super::timeout_deciseconds;

    /// Holds the terminal in raw mode; restores the captured mode on drop.
    pub struct RawModeGuard {
        fd: RawFd,
        original: libc::termios,
    }

    impl RawModeGuard {
        /// Capture the current mode and switch to raw, non-blocking-ish reads:
        /// `VMIN = 0` with `VTIME` set from `timeout`.
        pub fn enter(file: &File, timeout: Duration) -> io::Result<Self> {
            let fd = file.as_raw_fd();
            let mut original = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: fd is open for the lifetime of `file`; tcgetattr fills
            // the struct on success and we only read it after checking that.
            if unsafe { libc::tcgetattr(fd, original.as_mut_ptr()) } != 0 {
                return Err(io::Error::last_os_error());
            }
            // SAFETY: initialized by the successful tcgetattr above.
            let original = unsafe { original.assume_init() };

            let mut raw = original;
            // SAFETY: raw is a valid termios value.
            unsafe { libc::cfmakeraw(&mut raw) };
            raw.c_cc[libc::VMIN] = 0;
            raw.c_cc[libc::VTIME] = timeout_deciseconds(timeout);

            // SAFETY: fd is a terminal (tcgetattr succeeded), raw is valid.
            if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(Self { fd, original })
        }
    }

    impl Drop for RawModeGuard {
        fn drop(&mut self) {
            // SAFETY: restoring the exact struct tcgetattr produced.
            if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.original) } != 0 {
                tracing::warn!(
                    error = %io::Error::last_os_error(),
                    "failed to restore terminal mode"
                );
            }
        }
    }

    impl std::fmt::Debug for RawModeGuard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("RawModeGuard").field("fd", &self.fd).finish()
        }
    }
}

#[cfg(not(unix))]
mod fallback {
    use std::fs::File;
    use std::io;
    use std::time::Duration;

    /// Raw mode is only implemented for Unix terminals.
    #[derive(Debug)]
    pub struct RawModeGuard;

    impl RawModeGuard {
        pub fn enter(_file: &File, _timeout: Duration) -> io::Result<Self> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "raw terminal mode requires a Unix terminal",
            ))
        }
    }
}
