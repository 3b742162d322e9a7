//! Terminal size detection for output descriptors.

use std::os::fd::{AsFd, AsRawFd, BorrowedFd};

use terminal_size::{Height, Width, terminal_size_of};

use crate::error::{Error, Result};

/// Dimensions of a terminal in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub columns: u16,
    pub lines: u16,
}

/// Query the terminal size behind `handle`.
///
/// Returns `Ok(None)` when the descriptor is not connected to an
/// interactive terminal (a redirected stream, a regular file). A size
/// query that fails on a real terminal is [`Error::TerminalQuery`].
pub fn probe<F: AsFd>(handle: &F) -> Result<Option<TermSize>> {
    probe_fd(handle.as_fd())
}

/// Like [`probe`], for an already borrowed descriptor.
pub fn probe_fd(fd: BorrowedFd<'_>) -> Result<Option<TermSize>> {
    if unsafe { libc::isatty(fd.as_raw_fd()) } != 1 {
        return Ok(None);
    }
    match terminal_size_of(fd) {
        Some((Width(columns), Height(lines))) => Ok(Some(TermSize { columns, lines })),
        None => Err(Error::TerminalQuery { fd: fd.as_raw_fd() }),
    }
}
