//! Output streams a writer can bind to.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsFd, BorrowedFd};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::size::{self, TermSize};

/// A writable sink usable as a custom output stream.
///
/// The descriptor, when there is one, is what terminal size queries
/// run against; purely in-memory sinks return `None` and are never
/// treated as terminals.
pub trait StreamHandle: Write + Send {
    /// Descriptor backing this sink, if any.
    fn descriptor(&self) -> Option<BorrowedFd<'_>>;
}

impl StreamHandle for File {
    fn descriptor(&self) -> Option<BorrowedFd<'_>> {
        Some(self.as_fd())
    }
}

impl StreamHandle for io::Stdout {
    fn descriptor(&self) -> Option<BorrowedFd<'_>> {
        Some(self.as_fd())
    }
}

impl StreamHandle for io::Stderr {
    fn descriptor(&self) -> Option<BorrowedFd<'_>> {
        Some(self.as_fd())
    }
}

/// In-memory sink, useful for capturing output.
impl StreamHandle for Vec<u8> {
    fn descriptor(&self) -> Option<BorrowedFd<'_>> {
        None
    }
}

/// A shared, type-erased custom sink.
pub type SharedHandle = Arc<Mutex<dyn StreamHandle>>;

/// An output stream identified by what it writes to.
///
/// `Stdout` and `Stderr` resolve to the process-wide standard streams
/// at use time. `Handle` carries a shared custom sink whose identity is
/// the shared allocation: clones of one `Stream` refer to the same
/// stream, while two independently wrapped handles stay unrelated even
/// when they point at the same underlying device.
#[derive(Clone)]
pub enum Stream {
    Stdout,
    Stderr,
    Handle(SharedHandle),
}

impl Stream {
    /// Wrap `handle` as a shared custom stream.
    ///
    /// Every call creates a new identity; clone the returned `Stream`
    /// to refer to the same one from several places.
    pub fn handle(handle: impl StreamHandle + 'static) -> Self {
        Self::Handle(Arc::new(Mutex::new(handle)))
    }

    /// Current terminal size of the stream, `None` when it is not a
    /// terminal.
    pub fn size(&self) -> Result<Option<TermSize>> {
        match self {
            Self::Stdout => size::probe(&io::stdout()),
            Self::Stderr => size::probe(&io::stderr()),
            Self::Handle(handle) => {
                let guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
                match guard.descriptor() {
                    Some(fd) => size::probe_fd(fd),
                    None => Ok(None),
                }
            }
        }
    }

    pub(crate) fn write_all(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().write_all(text.as_bytes()),
            Self::Stderr => io::stderr().write_all(text.as_bytes()),
            Self::Handle(handle) => {
                let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
                guard.write_all(text.as_bytes())
            }
        }
    }

    pub(crate) fn key(&self) -> StreamKey {
        match self {
            Self::Stdout => StreamKey::Stdout,
            Self::Stderr => StreamKey::Stderr,
            Self::Handle(handle) => StreamKey::Handle(Arc::as_ptr(handle).cast::<()>() as usize),
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stream::Stdout"),
            Self::Stderr => f.write_str("Stream::Stderr"),
            Self::Handle(handle) => {
                write!(f, "Stream::Handle({:p})", Arc::as_ptr(handle).cast::<()>())
            }
        }
    }
}

/// Cache key for a stream: stream identity, not device identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum StreamKey {
    Stdout,
    Stderr,
    Handle(usize),
}
