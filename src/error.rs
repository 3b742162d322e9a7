use std::io;
use std::os::fd::RawFd;

/// Errors produced while detecting widths, wrapping, and writing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The descriptor refers to a terminal, but the size query failed.
    ///
    /// Not being connected to a terminal is not an error; width
    /// detection reports that case as "no size available".
    #[error("terminal size query failed on descriptor {fd}")]
    TerminalQuery {
        /// The descriptor whose query failed.
        fd: RawFd,
    },

    /// A print was attempted through a writer with no bound stream.
    #[error("writer is not bound to an output stream")]
    Unbound,

    /// An underlying read or write failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
