mod cli;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::PoisonError;

use anyhow::{Context, Result};
use clap::Parser;
use termfold::input::{self, try_input};
use termfold::registry;
use termfold::stream::Stream;
use termfold::wrap::{WrapStyle, WrapWriter, split_paragraphs};

use cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = read_input(&cli.files)?;
    let paragraphs = split_paragraphs(&text);

    match &cli.output {
        Some(path) => {
            if path.exists() && !cli.force && !confirm_overwrite(path)? {
                return Ok(());
            }
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let writer = build_writer(&cli, Stream::handle(file))?;
            writer.print_all(&paragraphs)?;
        }
        None if has_custom_output(&cli) => {
            let writer = build_writer(&cli, Stream::Stdout)?;
            writer.print_all(&paragraphs)?;
        }
        None => {
            let writer = registry::stdout()?;
            let writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
            writer.print_all(&paragraphs)?;
        }
    }
    Ok(())
}

/// Whether any flag asks for a writer with non-default configuration.
/// Without one, the shared registry writer for stdout is used as-is.
fn has_custom_output(cli: &Cli) -> bool {
    cli.width.is_some()
        || !cli.indent.is_empty()
        || cli.first_indent.is_some()
        || cli.keep_long_words
        || cli.no_hyphen_breaks
}

fn build_writer(cli: &Cli, stream: Stream) -> Result<WrapWriter> {
    let style = WrapStyle {
        initial_indent: cli
            .first_indent
            .clone()
            .unwrap_or_else(|| cli.indent.clone()),
        subsequent_indent: cli.indent.clone(),
        break_words: !cli.keep_long_words,
        break_on_hyphens: !cli.no_hyphen_breaks,
    };
    let writer = match cli.width {
        Some(width) => WrapWriter::bound_with_width(stream, width, style),
        None => WrapWriter::bound(stream, style)?,
    };
    Ok(writer)
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    let question = format!("{} already exists. Overwrite? [y/N]", path.display());
    let answer = try_input(Some(&question), "n", input::PROMPT_SUFFIX)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn read_input(files: &[PathBuf]) -> Result<String> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(text);
    }

    let mut text = String::new();
    for path in files {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&contents);
    }
    Ok(text)
}
