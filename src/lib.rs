//! Terminal-aware paragraph output for command-line tools.
//!
//! [`WrapWriter`] wraps paragraphs to the width of the terminal behind
//! an output stream and writes them out; the width is captured once and
//! refreshed only on request. The [`registry`] hands out one shared
//! writer per stream so every part of a program wraps output
//! consistently, and [`try_input`] reads a line of input without
//! falling over on a closed standard input.
//!
//! ```no_run
//! use std::sync::PoisonError;
//!
//! # fn main() -> termfold::Result<()> {
//! let writer = termfold::registry::stdout()?;
//! let writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
//! writer.print("a paragraph wrapped to the current terminal width")?;
//! # Ok(())
//! # }
//! ```

use std::sync::PoisonError;

pub mod error;
pub mod input;
pub mod registry;
pub mod size;
pub mod stream;
pub mod wrap;

pub use error::{Error, Result};
pub use input::try_input;
pub use size::TermSize;
pub use stream::{SharedHandle, Stream, StreamHandle};
pub use wrap::{SharedWriter, WrapStyle, WrapWriter, split_paragraphs};

/// Print `text` to standard output, wrapped to the current terminal
/// width.
pub fn print_wrapped(text: &str) -> Result<()> {
    let writer = registry::stdout()?;
    let writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
    writer.print(text)
}

/// Print `paragraphs` to standard output separated by blank lines,
/// each wrapped to the current terminal width.
pub fn print_paragraphs<I, S>(paragraphs: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let writer = registry::stdout()?;
    let writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
    writer.print_all(paragraphs)
}
