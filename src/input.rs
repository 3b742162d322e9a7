//! Line input that degrades gracefully on a closed standard input.

use std::io::{self, BufRead, Write};
use std::sync::PoisonError;

use crate::error::{Error, Result};
use crate::registry;

/// Prompt suffix used by interactive questions.
pub const PROMPT_SUFFIX: &str = "\n? ";

/// Read one line from standard input, returning `on_eof` when input is
/// exhausted or closed.
///
/// A non-empty `prompt` is printed through the shared standard output
/// writer, wrapped to its current width, with `end` appended; an
/// empty prompt writes `end` verbatim before reading. End of stream
/// and a closed descriptor both yield `on_eof`; any other I/O error
/// surfaces. The returned line has its trailing line terminator
/// stripped.
pub fn try_input(prompt: Option<&str>, on_eof: &str, end: &str) -> Result<String> {
    try_input_from(&mut io::stdin().lock(), prompt, on_eof, end)
}

/// Like [`try_input`], reading from `reader` instead of standard
/// input. Prompt text still goes to standard output.
pub fn try_input_from<R: BufRead>(
    reader: &mut R,
    prompt: Option<&str>,
    on_eof: &str,
    end: &str,
) -> Result<String> {
    let mut end = end;
    if let Some(prompt) = prompt.filter(|prompt| !prompt.is_empty()) {
        let writer = registry::stdout()?;
        let writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.print_with(prompt, end)?;
        end = "";
    }

    match read_line(reader, end) {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Ok(on_eof.to_owned()),
        Err(error) if error.raw_os_error() == Some(libc::EBADF) => Ok(on_eof.to_owned()),
        Err(error) => Err(Error::Io(error)),
    }
}

/// Write `prompt` to standard output, flush, and read one line from
/// `reader`. `None` at end of stream.
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> io::Result<Option<String>> {
    let mut out = io::stdout();
    if !prompt.is_empty() {
        out.write_all(prompt.as_bytes())?;
    }
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
