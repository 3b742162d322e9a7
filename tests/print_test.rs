#![allow(clippy::unwrap_used)]

use std::io::{self, Cursor, Write};
use std::os::fd::BorrowedFd;
use std::sync::{Arc, Mutex};

use termfold::input::try_input_from;
use termfold::registry::{self, RegistryOptions};
use termfold::stream::{Stream, StreamHandle};
use termfold::wrap::{WrapStyle, WrapWriter};

/// Sink that shares its buffer so the test can read back what a writer
/// printed through it.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StreamHandle for Capture {
    fn descriptor(&self) -> Option<BorrowedFd<'_>> {
        None
    }
}

#[test]
fn wraps_to_the_configured_width() {
    let capture = Capture::default();
    let writer =
        WrapWriter::bound_with_width(Stream::handle(capture.clone()), 10, WrapStyle::default());
    writer.print("the quick brown fox").unwrap();
    assert_eq!(capture.contents(), "the quick\nbrown fox\n");
}

#[test]
fn registry_shares_one_writer_per_stream() {
    let capture = Capture::default();
    let stream = Stream::handle(capture.clone());
    let options = RegistryOptions {
        weak: false,
        ignore_errors: true,
    };

    let first = registry::get_with(Some(stream.clone()), options).unwrap();
    let second = registry::get_with(Some(stream), options).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // Not a terminal, so paragraphs pass through unwrapped.
    let writer = first.lock().unwrap();
    assert_eq!(writer.width(), 0);
    writer.print("left exactly as written").unwrap();
    drop(writer);
    assert_eq!(capture.contents(), "left exactly as written\n");
}

#[test]
fn multi_paragraph_fill() {
    let capture = Capture::default();
    let writer =
        WrapWriter::bound_with_width(Stream::handle(capture.clone()), 20, WrapStyle::default());
    writer
        .print_all([
            "a first paragraph that needs several lines",
            "and a second one",
        ])
        .unwrap();
    insta::assert_snapshot!(capture.contents(), @r"
    a first paragraph
    that needs several
    lines

    and a second one
    ");
}

#[test]
fn bulleted_fill_with_hanging_indent() {
    let capture = Capture::default();
    let style = WrapStyle {
        initial_indent: "- ".to_owned(),
        subsequent_indent: "  ".to_owned(),
        ..WrapStyle::default()
    };
    let writer = WrapWriter::bound_with_width(Stream::handle(capture.clone()), 16, style);
    writer
        .print_all(["wrap each entry under its bullet", "short one"])
        .unwrap();
    insta::assert_snapshot!(capture.contents(), @r"
    - wrap each
      entry under
      its bullet

    - short one
    ");
}

#[test]
fn crate_level_conveniences_reach_stdout() {
    termfold::print_wrapped("a single paragraph").unwrap();
    termfold::print_paragraphs(["one", "two"]).unwrap();

    let writer = registry::stderr().unwrap();
    assert!(writer.lock().unwrap().stream().is_some());
}

#[test]
fn exhausted_input_returns_the_default() {
    let mut input = Cursor::new("");
    let answer = try_input_from(&mut input, Some("Continue"), "n", "\n? ").unwrap();
    assert_eq!(answer, "n");
}

#[test]
fn available_input_wins_over_the_default() {
    let mut input = Cursor::new("y\n");
    let answer = try_input_from(&mut input, Some("Continue"), "n", "\n? ").unwrap();
    assert_eq!(answer, "y");
}
