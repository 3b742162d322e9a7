//! Process-wide cache of shared writers, one per output stream.
//!
//! The cache is guarded by a mutex so the global is sound to hold, but
//! the intended use remains single-threaded: concurrent callers are
//! serialized, nothing more is promised.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, Weak};

use log::debug;

use crate::error::Result;
use crate::stream::{Stream, StreamKey};
use crate::wrap::{SharedWriter, WrapStyle, WrapWriter};

static REGISTRY: LazyLock<Mutex<HashMap<StreamKey, Entry>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

enum Entry {
    Weak(Weak<Mutex<WrapWriter>>),
    Strong(SharedWriter),
}

impl Entry {
    fn live(&self) -> Option<SharedWriter> {
        match self {
            Self::Weak(writer) => writer.upgrade(),
            Self::Strong(writer) => Some(Arc::clone(writer)),
        }
    }
}

/// How [`get_with`] caches and constructs writers.
#[derive(Debug, Clone, Copy)]
pub struct RegistryOptions {
    /// Cache the writer weakly: it lives exactly as long as callers
    /// hold it, and is recreated (width re-queried) afterwards.
    pub weak: bool,
    /// Absorb terminal size query failures, degrading to width 0.
    pub ignore_errors: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            weak: true,
            ignore_errors: true,
        }
    }
}

/// The shared writer for `stream`, with default options.
///
/// `None` resolves to standard output at call time. An expired weak
/// entry counts as missing and is replaced; callers must therefore not
/// assume the same writer comes back across calls unless they kept a
/// reference (or requested strong storage).
pub fn get(stream: Option<Stream>) -> Result<SharedWriter> {
    get_with(stream, RegistryOptions::default())
}

/// Like [`get`], with explicit caching and error handling behavior.
pub fn get_with(stream: Option<Stream>, options: RegistryOptions) -> Result<SharedWriter> {
    let stream = stream.unwrap_or(Stream::Stdout);
    let key = stream.key();

    let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(writer) = registry.get(&key).and_then(Entry::live) {
        return Ok(writer);
    }

    let writer = match WrapWriter::bound(stream.clone(), WrapStyle::default()) {
        Ok(writer) => writer,
        Err(error) if options.ignore_errors => {
            // Degrade to width 0 rather than retrying the query.
            debug!("width detection failed for {key:?}: {error}");
            let mut writer = WrapWriter::unbound(WrapStyle::default());
            writer.bind(stream);
            writer
        }
        Err(error) => return Err(error),
    };
    debug!("caching writer for {key:?} at width {}", writer.width());

    let shared = Arc::new(Mutex::new(writer));
    let entry = if options.weak {
        Entry::Weak(Arc::downgrade(&shared))
    } else {
        Entry::Strong(Arc::clone(&shared))
    };
    registry.insert(key, entry);
    Ok(shared)
}

/// The shared writer for standard output.
pub fn stdout() -> Result<SharedWriter> {
    get(None)
}

/// The shared writer for standard error.
pub fn stderr() -> Result<SharedWriter> {
    get(Some(Stream::Stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_weak_entries_are_shared() {
        let stream = Stream::handle(Vec::new());
        let first = get(Some(stream.clone())).unwrap();
        let second = get(Some(stream)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn weak_entries_are_recreated_after_drop() {
        let stream = Stream::handle(Vec::new());
        let first = get(Some(stream.clone())).unwrap();
        drop(first);
        let second = get(Some(stream)).unwrap();
        let writer = second.lock().unwrap();
        assert!(writer.stream().is_some());
        assert_eq!(writer.width(), 0);
    }

    #[test]
    fn strong_entries_survive_without_external_references() {
        let stream = Stream::handle(Vec::new());
        let options = RegistryOptions {
            weak: false,
            ..RegistryOptions::default()
        };
        let first = get_with(Some(stream.clone()), options).unwrap();
        let first_ptr = Arc::as_ptr(&first);
        drop(first);
        let second = get_with(Some(stream), options).unwrap();
        assert_eq!(first_ptr, Arc::as_ptr(&second));
    }

    #[test]
    fn non_terminal_streams_get_width_zero_writers() {
        let stream = Stream::handle(Vec::new());
        let writer = get(Some(stream)).unwrap();
        let writer = writer.lock().unwrap();
        assert_eq!(writer.width(), 0);
        assert!(writer.stream().is_some());
    }

    #[test]
    fn stdout_writer_is_bound() {
        let writer = stdout().unwrap();
        let writer = writer.lock().unwrap();
        assert!(writer.stream().is_some());
    }
}
