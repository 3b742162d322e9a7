use std::path::PathBuf;

use clap::Parser;

/// Rewrap paragraphs of text to the width of the terminal.
///
/// Reads the given files (or standard input), splits the text into
/// paragraphs at blank lines, and rewraps each paragraph to the
/// detected terminal width.
#[derive(Parser, Debug)]
#[command(name = "termfold", version)]
pub struct Cli {
    /// Files to rewrap; standard input when none are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Wrap width in columns (0 disables wrapping). Defaults to the
    /// detected terminal width.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Prefix every output line with this string.
    #[arg(long, default_value = "", value_name = "STRING")]
    pub indent: String,

    /// Prefix for the first line of each paragraph, overriding --indent.
    #[arg(long, value_name = "STRING")]
    pub first_indent: Option<String>,

    /// Keep words longer than the wrap width on a single line.
    #[arg(long)]
    pub keep_long_words: bool,

    /// Never break words at hyphens.
    #[arg(long)]
    pub no_hyphen_breaks: bool,

    /// Write to this file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(short, long)]
    pub force: bool,
}
