//! Interactive prompts for paths missing from the command line.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use console::Term;
use std::io::BufRead;
use std::io::{self};
use std::path::PathBuf;

pub const DOCUMENT_PROMPT: &str = "Enter the letter filename: ";
pub const ARCHIVE_PROMPT: &str = "Enter the archive filename: ";

/// Returns `given`, or asks for a path on the terminal.
pub fn path_or_prompt(given: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path);
    }

    let term = Term::stderr();
    term.write_str(prompt)
        .context("Failed to write prompt to terminal")?;
    // Term only reads from a tty; piped input is read from stdin directly
    let line = if term.is_term() {
        term.read_line()
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).map(|_| line)
    }
    .context("Failed to read path from terminal")?;

    let path = clean_path(&line);
    if path.is_empty() {
        bail!("No path entered\nHINT: Pass the path as an argument to skip the prompt.");
    }
    Ok(PathBuf::from(path))
}

/// Drops surrounding whitespace and the quotes file managers add when a
/// path is pasted or dragged in.
pub fn clean_path(input: &str) -> String {
    input.trim().replace('"', "")
}
