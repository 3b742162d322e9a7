//! Width-aware paragraph writing.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use textwrap::{Options, WordSplitter, WrapAlgorithm};

use crate::error::{Error, Result};
use crate::stream::Stream;

/// Wrapping configuration applied to every paragraph.
#[derive(Debug, Clone)]
pub struct WrapStyle {
    /// Prefix for the first line of each paragraph.
    pub initial_indent: String,
    /// Prefix for every following line.
    pub subsequent_indent: String,
    /// Break words longer than the wrap width.
    pub break_words: bool,
    /// Allow breaking words at existing hyphens.
    pub break_on_hyphens: bool,
}

impl Default for WrapStyle {
    fn default() -> Self {
        Self {
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            break_words: true,
            break_on_hyphens: true,
        }
    }
}

/// Writes paragraphs to a bound [`Stream`], wrapped to a fixed width.
///
/// The width is captured once, when the writer is created, and only
/// changes through an explicit [`refresh_width`](Self::refresh_width),
/// so printing never costs a size query. A width of `0` means "no
/// wrapping": paragraphs are written verbatim.
#[derive(Debug)]
pub struct WrapWriter {
    stream: Option<Stream>,
    width: usize,
    style: WrapStyle,
}

/// A writer shared through the registry.
pub type SharedWriter = Arc<Mutex<WrapWriter>>;

impl WrapWriter {
    /// A writer with no bound stream and width 0.
    pub fn unbound(style: WrapStyle) -> Self {
        Self {
            stream: None,
            width: 0,
            style,
        }
    }

    /// Bind `stream` and adopt its current terminal width.
    ///
    /// A stream that is not a terminal yields width 0; only a genuine
    /// size query failure is an error.
    pub fn bound(stream: Stream, style: WrapStyle) -> Result<Self> {
        let width = match stream.size()? {
            Some(size) => usize::from(size.columns),
            None => 0,
        };
        Ok(Self {
            stream: Some(stream),
            width,
            style,
        })
    }

    /// Bind `stream` with an explicit width, skipping the size query.
    pub fn bound_with_width(stream: Stream, width: usize, style: WrapStyle) -> Self {
        Self {
            stream: Some(stream),
            width,
            style,
        }
    }

    /// Attach `stream` to a writer constructed without one. The width
    /// is left as it is.
    pub fn bind(&mut self, stream: Stream) {
        self.stream = Some(stream);
    }

    pub fn stream(&self) -> Option<&Stream> {
        self.stream.as_ref()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn style(&self) -> &WrapStyle {
        &self.style
    }

    /// Wrap `text` into lines at the current width. At width 0 the
    /// text comes back as a single line.
    pub fn wrap<'a>(&'a self, text: &'a str) -> Vec<Cow<'a, str>> {
        if self.width == 0 {
            return vec![Cow::Borrowed(text)];
        }
        textwrap::wrap(text, self.options())
    }

    /// Fill `text` into a single string with embedded line breaks. At
    /// width 0 the text passes through unchanged.
    pub fn fill(&self, text: &str) -> String {
        if self.width == 0 {
            return text.to_owned();
        }
        textwrap::fill(text, self.options())
    }

    /// Print one paragraph followed by a newline.
    pub fn print(&self, paragraph: &str) -> Result<()> {
        self.print_with(paragraph, "\n")
    }

    /// Print one paragraph followed by `end`.
    ///
    /// The paragraph is wrapped at the current width (or written
    /// verbatim at width 0) and the wrapped lines are joined with
    /// `'\n'`. Fails with [`Error::Unbound`] when no stream is bound;
    /// write errors surface unchanged.
    pub fn print_with(&self, paragraph: &str, end: &str) -> Result<()> {
        let stream = self.stream.as_ref().ok_or(Error::Unbound)?;
        let mut out = if self.width > 0 {
            self.wrap(paragraph).join("\n")
        } else {
            paragraph.to_owned()
        };
        out.push_str(end);
        stream.write_all(&out)?;
        Ok(())
    }

    /// Print a sequence of paragraphs separated by blank lines.
    pub fn print_all<I, S>(&self, paragraphs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.print_all_with(paragraphs, "\n", "\n\n")
    }

    /// Print a sequence of paragraphs, each filled independently,
    /// joined by `sep` and followed by `end`.
    pub fn print_all_with<I, S>(&self, paragraphs: I, end: &str, sep: &str) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stream = self.stream.as_ref().ok_or(Error::Unbound)?;
        let filled: Vec<String> = paragraphs
            .into_iter()
            .map(|paragraph| self.fill(paragraph.as_ref()))
            .collect();
        let mut out = filled.join(sep);
        out.push_str(end);
        stream.write_all(&out)?;
        Ok(())
    }

    /// Re-query the bound stream and adopt its width.
    ///
    /// Returns `Ok(true)` when a positive width was adopted. When the
    /// stream is not a terminal (or reports zero columns) the stored
    /// width is left untouched and the result is `Ok(false)`.
    pub fn refresh_width(&mut self) -> Result<bool> {
        let stream = self.stream.clone().ok_or(Error::Unbound)?;
        self.refresh_width_from(&stream)
    }

    /// Like [`refresh_width`](Self::refresh_width), querying `stream`
    /// instead of the bound one.
    pub fn refresh_width_from(&mut self, stream: &Stream) -> Result<bool> {
        match stream.size()? {
            Some(size) if size.columns > 0 => {
                self.width = usize::from(size.columns);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn options(&self) -> Options<'_> {
        Options::new(self.width)
            .initial_indent(&self.style.initial_indent)
            .subsequent_indent(&self.style.subsequent_indent)
            .break_words(self.style.break_words)
            .word_splitter(if self.style.break_on_hyphens {
                WordSplitter::HyphenSplitter
            } else {
                WordSplitter::NoHyphenation
            })
            .wrap_algorithm(WrapAlgorithm::FirstFit)
    }
}

/// Split `text` into paragraphs at blank lines.
///
/// Interior line breaks are collapsed to single spaces so each
/// paragraph rewraps as a unit; blank-only lines count as separators
/// and empty paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}
