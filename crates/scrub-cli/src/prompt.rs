//! Line-based prompts for the `interactive` command.
//!
//! Generic over the reader and writer so the dialogue can be driven from
//! tests. End of input at any prompt cancels.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Paths collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    pub input: PathBuf,
    /// `None` when the user left the save folder blank.
    pub output_dir: Option<PathBuf>,
}

/// Asks for the CSV to convert and the folder to save into.
///
/// The CSV prompt repeats until an existing file is given. The folder prompt
/// repeats until it is blank or names an existing directory. Returns `None`
/// when input ends.
pub fn prompt_paths<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Option<PromptAnswers>> {
    let input = loop {
        let Some(answer) = ask(reader, writer, "CSV file to convert: ")? else {
            return Ok(None);
        };
        if answer.is_empty() {
            continue;
        }
        let path = PathBuf::from(answer);
        if path.is_file() {
            break path;
        }
        writeln!(writer, "File not found: {}", path.display())?;
    };

    let output_dir = loop {
        let Some(answer) = ask(
            reader,
            writer,
            "Folder to save into (blank for the CSV's folder): ",
        )?
        else {
            return Ok(None);
        };
        if answer.is_empty() {
            break None;
        }
        let path = PathBuf::from(answer);
        if path.is_dir() {
            break Some(path);
        }
        writeln!(writer, "Folder not found: {}", path.display())?;
    };

    Ok(Some(PromptAnswers { input, output_dir }))
}

/// Asks a yes/no question. Blank means yes; end of input means no.
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        let Some(answer) = ask(reader, writer, &format!("{question} [Y/n]: "))? else {
            return Ok(false);
        };
        match answer.to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(writer, "Please answer y or n.")?,
        }
    }
}

/// Prints `question` and reads one answer, trimmed and unquoted.
fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{question}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        writeln!(writer)?;
        return Ok(None);
    }
    Ok(Some(unquote(line.trim()).to_string()))
}

/// Paths dragged into a terminal often arrive wrapped in quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Shows the file locations a run will use.
pub fn describe_run<W: Write>(
    writer: &mut W,
    source: &Path,
    edited: &Path,
    log: &Path,
) -> io::Result<()> {
    writeln!(writer, "Original file: {}", source.display())?;
    writeln!(writer, "Edited file:   {}", edited.display())?;
    writeln!(writer, "Log file:      {}", log.display())
}
